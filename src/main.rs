/*
Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

use clap::Parser;
use gated_log::{
    log_debug, log_error, log_info, log_notice, log_verbose, log_warning, BuildConfig,
    GateState, SeverityLevel, THRESHOLD,
};

/// Shows which log levels this build compiles in.
#[derive(Parser)]
#[command(name = "gated-log-demo")]
#[command(about = "Emit one message per severity level under this build's threshold", long_about = None)]
struct Cli {
    /// Print the resolved build configuration as JSON
    #[arg(long)]
    json: bool,

    /// Text attached to every emitted message
    #[arg(short, long, default_value = "hello from gated-log")]
    message: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = BuildConfig::CURRENT;

    if cli.json {
        println!("{}", config.to_json()?);
    } else {
        println!(
            "profile: {:?}, threshold: {}, overridden: {}",
            config.profile, config.threshold, config.overridden
        );
        for level in SeverityLevel::ALL {
            println!("  {:<8} {:?}", level.tag(), GateState::of(level, THRESHOLD));
        }
    }

    log_verbose!("{}", cli.message);
    log_debug!("{}", cli.message);
    log_info!("{}", cli.message);
    log_notice!("{}", cli.message);
    log_warning!("{}", cli.message);
    log_error!("{}", cli.message);

    Ok(())
}
