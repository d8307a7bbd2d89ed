use mimalloc::MiMalloc;
use std::process::ExitCode;
use tab_indent::IndentConfig;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    match platform::run(IndentConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tabsmith: {e}");
            ExitCode::FAILURE
        }
    }
}
