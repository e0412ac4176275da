use crate::store::Store;

/// The shared state containers of the application.
///
/// One instance is constructed at startup and handed to every collaborator:
/// UI components subscribe, wallet-connection logic writes `user_address` and
/// `wallet_connected`, task management writes the task lists, and the theme
/// toggle writes `dark_theme`. Cloning an `AppState` shares the underlying
/// stores, so tests can construct isolated instances per case instead of
/// reaching for process-wide globals.
///
/// Generic over the task record type `T`; the record shape is owned by the
/// consuming code, not by this crate.
pub struct AppState<T> {
    /// Primary task collection, initially empty.
    pub task_list: Store<Vec<T>>,
    /// Secondary, chain-related task collection, initially empty.
    pub web3_task_list: Store<Vec<T>>,
    /// Connected wallet identifier, absent until a wallet connects.
    pub user_address: Store<Option<String>>,
    /// UI theme preference, initially `false` (light).
    pub dark_theme: Store<bool>,
    /// Wallet connection status, initially `false`.
    pub wallet_connected: Store<bool>,
}

impl<T: Clone> AppState<T> {
    /// Create the five containers with their initial values.
    pub fn new() -> Self {
        Self {
            task_list: Store::new(Vec::new()),
            web3_task_list: Store::new(Vec::new()),
            user_address: Store::new(None),
            dark_theme: Store::new(false),
            wallet_connected: Store::new(false),
        }
    }
}

impl<T: Clone> Default for AppState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for AppState<T> {
    fn clone(&self) -> Self {
        Self {
            task_list: self.task_list.clone(),
            web3_task_list: self.web3_task_list.clone(),
            user_address: self.user_address.clone(),
            dark_theme: self.dark_theme.clone(),
            wallet_connected: self.wallet_connected.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn initial_values() {
        let state: AppState<String> = AppState::new();

        assert!(state.task_list.get().is_empty());
        assert!(state.web3_task_list.get().is_empty());
        assert_eq!(state.user_address.get(), None);
        assert!(!state.dark_theme.get());
        assert!(!state.wallet_connected.get());
    }

    #[test]
    fn wallet_connect_flow() {
        let state: AppState<String> = AppState::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        let _sub = state
            .wallet_connected
            .subscribe(move |connected| sink.lock().unwrap().push(*connected));

        assert_eq!(*seen.lock().unwrap(), vec![false]);

        state.wallet_connected.set(true);

        assert_eq!(*seen.lock().unwrap(), vec![false, true]);
    }

    #[test]
    fn task_list_update_is_observed() {
        let state: AppState<String> = AppState::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        let _sub = state
            .task_list
            .subscribe(move |tasks| sink.lock().unwrap().push(tasks.clone()));

        state.task_list.update(|tasks| tasks.push("task1".to_string()));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[1], vec!["task1".to_string()]);
    }

    #[test]
    fn clone_shares_the_same_stores() {
        let state: AppState<String> = AppState::new();
        let handle = state.clone();

        handle.user_address.set(Some("0xabc".to_string()));
        handle.dark_theme.set(true);

        assert_eq!(state.user_address.get(), Some("0xabc".to_string()));
        assert!(state.dark_theme.get());
    }

    #[test]
    fn containers_are_independent() {
        let state: AppState<String> = AppState::new();

        state.task_list.update(|tasks| tasks.push("only here".to_string()));

        assert!(state.web3_task_list.get().is_empty());
    }
}
