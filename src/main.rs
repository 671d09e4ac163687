use {clap::Parser, std::process, tokscan::Arguments};

fn main() {
  match Arguments::parse().run() {
    Ok(true) => {}
    Ok(false) => process::exit(1),
    Err(error) => {
      eprintln!("error: {error}");
      process::exit(2);
    }
  }
}
