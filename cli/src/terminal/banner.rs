use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
      ____   __  ______  _  _
     / ___| /_ ||____  || || |
    / /___   | |    / / | || |_
    |  _  \  | |   / /  |__   _|
    | (_) |  | |  / /      | |
     \___/   |_| /_/       |_|
"#;

pub fn print() {
    print::print(&format!("{}", BANNER.bright_green().bold()));
}
