mod command;
mod report;
mod table;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
