use std::process::ExitCode;

fn main() -> ExitCode {
    match chessrating::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("chessrating: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
