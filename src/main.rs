use std::process::ExitCode;

fn main() -> ExitCode {
    match sdd::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::FAILURE
        }
    }
}
