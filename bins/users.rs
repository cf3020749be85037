mod launcher;

fn main() -> std::process::ExitCode {
    launcher::launch("users", |cfg| cfg.users.worker_threads, server::run_users)
}
