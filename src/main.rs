//! fex - an interactive filesystem shell
//!
//! One command per line over stdin/stdout: list, navigate, create, copy,
//! move, delete, search, and inspect or change permission bits.

use std::io::{self, BufRead};

mod command;
mod config;
mod errors;
mod fs;
mod session;
mod ui;

use command::Command;
use config::Config;
use session::Session;

fn main() -> io::Result<()> {
    let config = Config::load();
    let cwd = std::env::current_dir()?;
    let mut session = Session::new(cwd, config);

    println!("fex - interactive file explorer");
    println!("{}", command::HELP);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        match session.listing() {
            Ok(entries) => ui::print_listing(&session.cwd, &entries, &session.config),
            Err(e) => println!("{}", e),
        }
        ui::prompt(&session.cwd)?;

        // EOF ends the session like `exit`
        let Some(line) = lines.next() else { break };
        let line = line?;

        match Command::parse(&line) {
            Ok(Command::Exit) => break,
            Ok(cmd) => match session.execute(cmd) {
                Ok(msg) if !msg.is_empty() => println!("{}", msg),
                Ok(_) => {}
                Err(e) => println!("{}", e),
            },
            Err(e) => println!("{}", e),
        }
    }

    println!("Exiting.");
    Ok(())
}
