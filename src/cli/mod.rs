mod context;
mod flags;
mod parse;
pub mod prompts;

pub use context::Context;
pub use flags::CliFlags;
pub use parse::parse;

/// Exit status for usage and validation errors.
const USAGE_EXIT: i32 = 2;

/// Run one CLI invocation and exit on failure.
pub fn run(args: Vec<String>) {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::error("Run with --help for usage.");
            std::process::exit(USAGE_EXIT);
        }
    };

    if let Err(e) = ctx.run() {
        log::debug!("cli run failed: {e:?}");
        prompts::error(&e.to_string());
        std::process::exit(1);
    }
}
