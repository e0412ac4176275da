//! Demonstration of the wallet connection flow through shared state

use signalbox::AppState;

#[derive(Clone, Debug)]
struct Task {
    name: String,
}

fn main() {
    println!("=== Wallet Session Example ===\n");

    let state: AppState<Task> = AppState::new();

    // The "UI" subscribes to connection status and address
    let _status = state.wallet_connected.subscribe(|connected| {
        println!("[ui] wallet connected: {connected}");
    });
    let _address = state.user_address.subscribe(|address| match address {
        Some(addr) => println!("[ui] address: {addr}"),
        None => println!("[ui] no wallet"),
    });

    // The "wallet connector" writes, knowing nothing about the UI
    println!("\nConnecting wallet...");
    state.user_address.set(Some("0x7a3f...c921".to_string()));
    state.wallet_connected.set(true);

    println!("\nQueueing a chain task...");
    state.web3_task_list.update(|tasks| {
        tasks.push(Task {
            name: "approve token spend".to_string(),
        });
    });
    state.web3_task_list.read(|tasks| {
        for task in tasks {
            println!("[chain] pending: {}", task.name);
        }
    });

    println!("\nDisconnecting...");
    state.wallet_connected.set(false);
    state.user_address.set(None);
}
