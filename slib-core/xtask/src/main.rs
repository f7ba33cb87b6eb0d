use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use xshell::{cmd, Shell};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build and test automation for slib-core", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Checks compilation for all supported targets
    CheckAll,
    /// Runs the test suite once per bit-primitive provider
    TestProviders {
        /// Restrict the run to one provider
        #[arg(long, short, value_enum, default_value_t = ProviderArg::All)]
        provider: ProviderArg,
    },
    /// Runs the Kani proofs (requires cargo-kani)
    Kani {
        /// Run a single harness by name
        #[arg(long)]
        harness: Option<String>,
    },
    /// Runs the callgrind benchmarks
    Bench,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum ProviderArg {
    /// core integer methods
    Intrinsic,
    /// Explicit x86_64 LZCNT / TZCNT / POPCNT
    Hardware,
    /// Shift-and-test loops
    Portable,
    All,
}

/// Targets checked by `check-all`: (triple, uses cross, is no_std).
const TARGETS: &[(&str, bool, bool)] = &[
    ("x86_64-unknown-linux-gnu", false, false),
    ("aarch64-unknown-linux-gnu", true, false),
    ("thumbv7em-none-eabihf", false, true),
    ("wasm32-unknown-unknown", false, true),
];

fn main() -> Result<()> {
    let cli = Cli::parse();
    let sh = Shell::new()?;

    match cli.command {
        Commands::CheckAll => {
            check_all(&sh)?;
        }
        Commands::TestProviders { provider } => {
            test_providers(&sh, provider)?;
        }
        Commands::Kani { harness } => {
            run_kani(&sh, harness.as_deref())?;
        }
        Commands::Bench => {
            println!(">> Running callgrind benchmarks...");
            cmd!(sh, "cargo bench -p slib-core --bench bit_providers").run()?;
        }
    }

    Ok(())
}

fn check_all(sh: &Shell) -> Result<()> {
    // Assume running from project root
    for &(target, use_cross, bare_metal) in TARGETS {
        println!("--- Checking {} ---", target);

        if use_cross {
            ensure_cross(sh)?;
            cmd!(sh, "cross check --target {target} -p slib-core --release").run()?;
            continue;
        }

        ensure_target(sh, target)?;
        // Bare-metal targets have no std for the test harness; check the library only
        if bare_metal {
            cmd!(sh, "cargo check --target {target} -p slib-core --lib --release").run()?;
            cmd!(
                sh,
                "cargo check --target {target} -p slib-core --lib --release --features portable-bits,double-precision"
            )
            .run()?;
        } else {
            cmd!(sh, "cargo check --target {target} -p slib-core --all-targets --release").run()?;
        }
    }

    println!(">> All targets checked successfully.");
    Ok(())
}

fn test_providers(sh: &Shell, provider: ProviderArg) -> Result<()> {
    let run_intrinsic = matches!(provider, ProviderArg::Intrinsic | ProviderArg::All);
    let run_hardware = matches!(provider, ProviderArg::Hardware | ProviderArg::All);
    let run_portable = matches!(provider, ProviderArg::Portable | ProviderArg::All);

    if run_intrinsic {
        println!("--- Testing with Intrinsic provider ---");
        // Baseline x86-64 lacks lzcnt, so the build-time selection falls back to Intrinsic
        let _env = cfg!(target_arch = "x86_64")
            .then(|| sh.push_env("RUSTFLAGS", "-C target-cpu=x86-64"));
        cmd!(sh, "cargo test -p slib-core").run()?;
    }

    if run_hardware {
        if cfg!(target_arch = "x86_64") {
            println!("--- Testing with Hardware provider ---");
            // Enables lzcnt, bmi1 and popcnt so the explicit intrinsics compile in
            let _env = sh.push_env("RUSTFLAGS", "-C target-cpu=haswell");
            cmd!(sh, "cargo test -p slib-core").run()?;
        } else {
            println!("!! Hardware provider needs an x86_64 host. Skipping.");
        }
    }

    if run_portable {
        println!("--- Testing with Portable provider ---");
        cmd!(sh, "cargo test -p slib-core --features portable-bits").run()?;
    }

    println!(">> Provider tests passed.");
    Ok(())
}

fn run_kani(sh: &Shell, harness: Option<&str>) -> Result<()> {
    if cmd!(sh, "cargo kani --version").read().is_err() {
        return Err(anyhow::anyhow!(
            "'cargo-kani' is not installed. See https://model-checking.github.io/kani/install-guide.html"
        ));
    }

    match harness {
        Some(name) => cmd!(sh, "cargo kani -p slib-core --harness {name}").run()?,
        None => cmd!(sh, "cargo kani -p slib-core").run()?,
    }
    Ok(())
}

fn ensure_cross(sh: &Shell) -> Result<()> {
    if cmd!(sh, "cross --version").read().is_err() {
        println!("!! 'cross' is not installed. Installing via cargo...");
        cmd!(sh, "cargo install cross").run()?;
    }
    Ok(())
}

fn ensure_target(sh: &Shell, target: &str) -> Result<()> {
    let output = cmd!(sh, "rustup target list --installed").read()?;
    if !output.contains(target) {
        println!("!! Target '{}' not found. Installing via rustup...", target);
        cmd!(sh, "rustup target add {target}").run()?;
    }
    Ok(())
}
