use cursor_line_notify::{config, hook, log, nlog};

fn main() {
    log::init();
    config::load_env_files();

    let mut stdin = std::io::stdin();
    match hook::run(&mut stdin, |name| std::env::var(name).ok()) {
        Ok(()) => {
            eprintln!("LINE notification sent");
            nlog!("notification delivered");
        }
        Err(e) => {
            eprintln!("{e}");
            nlog!("run failed: {e}");
            std::process::exit(1);
        }
    }
}
