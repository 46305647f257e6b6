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

use std::env;

fn main() {
    println!("cargo:rustc-check-cfg=cfg(gated_log_optimized)");
    println!("cargo:rerun-if-env-changed=OPT_LEVEL");
    println!("cargo:rerun-if-changed=build.rs");

    // An unknown optimization level resolves to the development profile.
    let optimized = env::var("OPT_LEVEL")
        .map(|level| level != "0")
        .unwrap_or(false);

    if optimized {
        println!("cargo:rustc-cfg=gated_log_optimized");
    }

    let silenced = env::var_os("CARGO_FEATURE_THRESHOLD_OFF").is_some()
        || (optimized && env::var_os("CARGO_FEATURE_RELEASE_THRESHOLD_OFF").is_some());
    if silenced {
        println!(
            "cargo:warning=gated-log threshold is above ERROR; every log call site, errors included, is compiled out"
        );
    }
}
