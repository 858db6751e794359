use clap::Parser;


#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct CLI {
    /// Port to listen on
    #[arg(long, default_value = "3000")]
    pub port: u16
}
