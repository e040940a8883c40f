use clap::Parser;
use evsite::app::{EvsiteApp, EvsiteAppError};

fn main() -> Result<(), EvsiteAppError> {
    env_logger::init();
    let args = EvsiteApp::parse();
    args.op.run()
}
