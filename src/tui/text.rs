use std::io;

use crate::pass::{MAX_LENGTH, Mode};
use crate::settings::Settings;
use crate::terminal::{
    RESET, UNDERLINE, box_bottom, box_line, box_line_center, box_opt, box_rule, box_top, flush,
    print_error,
};

fn on_off(b: bool) -> &'static str {
    if b { "on" } else { "off" }
}

/// One-line description of what the current settings generate.
pub fn mode_summary(settings: &Settings) -> String {
    match settings.request().mode {
        Mode::NumericOnly => format!("{} digits", settings.pass_length),
        Mode::Mixed {
            allow_numbers,
            allow_symbols,
        } => format!(
            "{} chars • letters on • numbers {} • symbols {}",
            settings.pass_length,
            on_off(allow_numbers),
            on_off(allow_symbols)
        ),
    }
}

pub fn print_help() {
    let out = &mut io::stdout();
    box_top(out, "pairpass");
    box_line_center(out, "Two password candidates per run");
    box_line(out, "");
    box_line(out, "MODES:");
    box_line(out, "  1) Interactive: run without arguments. Generate, copy");
    box_line(out, "     either password with one key, and edit settings.");
    box_line(out, "  2) Client: pass flags (e.g. -l 20) to print two passwords.");
    box_line(out, "");
    box_line(out, "USAGE:");
    box_line(out, "  pairpass [OPTIONS]");
    box_line(out, "");
    box_line(out, " Password:");
    box_opt(
        out,
        "  -l, --length <N>",
        &format!("Characters per password (default: 16, max: {MAX_LENGTH}, 0 gives empty)"),
    );
    box_opt(out, "  -N, --numeric", "Digits only. Ignores the category flags.");
    box_opt(out, "      --no-numbers", "Never pick the digit category");
    box_opt(out, "      --no-symbols", "Never pick the symbol category");
    box_line(out, "");
    box_line(out, "  Letters are always allowed. Each category is picked with");
    box_line(out, "  equal odds, so any single digit or symbol shows up more");
    box_line(out, "  often than any single letter.");
    box_line(out, "");
    box_line(out, " Output:");
    box_opt(out, "  -b, --board <1|2>", "Copy password 1 or 2 to the clipboard");
    box_opt(out, "  -q, --quiet", "Print only the two passwords");
    box_line(out, "");
    box_line(out, " Settings:");
    box_opt(out, "  -s, --saved", "Start from the saved settings");
    box_opt(out, "      --save", "Save the resulting settings");
    box_line(out, "");
    box_line(out, " Randomness:");
    box_opt(out, "      --fast", "Small non-cryptographic PRNG (default)");
    box_opt(out, "      --secure", "Operating system random source");
    box_line(out, "");
    box_line(out, " Info:");
    box_opt(out, "  -h, --help", "Display this help message");
    box_opt(out, "  -v, --version", "Display version");
    box_line(out, "");
    box_line(out, "EXAMPLES:");
    box_line(out, "  pairpass -l 8 -N            Two 8-digit PINs");
    box_line(out, "  pairpass -l 12 --no-numbers --no-symbols");
    box_line(out, "                              Two 12-letter passwords");
    box_line(out, "  pairpass -b 1 --secure      Copy password 1, OS randomness");
    box_line(out, "  pairpass -s -l 24 --save    Change the saved length");
    box_bottom(out);
    println!();
}

pub fn print_main_footer() {
    let out = &mut io::stdout();
    box_top(out, "");
    box_line_center(out, "Enter: new | 1/2: copy | s: settings | h: help | q: quit");
    box_bottom(out);
    flush();
}

pub fn print_settings_menu(settings: &Settings, error_txt: &str) {
    let out = &mut io::stdout();
    box_top(out, "Settings Menu");
    box_line_center(out, "Esc/Enter: save and return");
    box_line(out, "");

    box_line(out, &format!("{UNDERLINE}Password{RESET}:"));
    box_line(out, &format!("  1) Length: {}", settings.pass_length));
    box_line(out, &format!("  2) Numeric only: {}", on_off(settings.numeric_only)));
    box_line(out, &format!("  3) Numbers: {}", on_off(settings.allow_numbers)));
    box_line(out, &format!("  4) Symbols: {}", on_off(settings.allow_symbols)));
    if settings.numeric_only {
        box_line(out, "      - 3 and 4 are ignored while numeric only is on");
    }

    box_line(out, "");
    box_line(out, &format!("{UNDERLINE}Randomness{RESET}:"));
    box_line(out, &format!("  5) Source: {}", settings.rng.describe()));

    box_line(out, "");
    box_rule(out);
    box_line(out, "     r) load defaults  |  f) load saved");
    box_bottom(out);

    if error_txt.is_empty() {
        println!();
    } else {
        print_error(error_txt);
    }
    flush();
}
