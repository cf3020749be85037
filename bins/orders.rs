mod launcher;

fn main() -> std::process::ExitCode {
    launcher::launch("orders", |cfg| cfg.orders.worker_threads, server::run_orders)
}
