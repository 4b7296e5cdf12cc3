//! 距离向量路由收敛仿真
//!
//! 读取链路列表（或使用内置四节点示例），逐轮打印路由表直到收敛。

use clap::Parser;
use dvr_rs::net::{ConvergenceReport, NodeId, RoundObserver, RoutingTable};
use dvr_rs::topo::{TopologySpec, build_example, build_network};
use dvr_rs::viz::{VizLogger, render_tables};
use std::collections::BTreeMap;
use std::fs;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "dvr-sim", about = "Distance Vector Routing 收敛仿真")]
struct Args {
    /// Path to topology.json (defaults to the built-in A/B/C/D example)
    #[arg(long)]
    topology: Option<PathBuf>,

    /// Abort with an error after this many rounds (at least 1)
    #[arg(long)]
    max_rounds: Option<NonZeroUsize>,

    /// Output viz JSON file (per-round snapshots)
    #[arg(long)]
    viz_json: Option<PathBuf>,

    /// Only print the final routing tables
    #[arg(long)]
    quiet: bool,
}

struct Console {
    quiet: bool,
    viz: Option<VizLogger>,
}

impl RoundObserver for Console {
    fn on_round(&mut self, round: usize, changed: bool, tables: &BTreeMap<NodeId, RoutingTable>) {
        if !self.quiet {
            println!("--- Iteration {round} ---");
            print!("{}", render_tables(tables));
        }
        if let Some(v) = self.viz.as_mut() {
            v.on_round(round, changed, tables);
        }
    }

    fn on_converged(&mut self, report: &ConvergenceReport) {
        println!("Convergence reached.\n");
        if let Some(v) = self.viz.as_mut() {
            v.on_converged(report);
        }
    }
}

fn main() -> ExitCode {
    // 初始化 tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();

    let built = match &args.topology {
        Some(path) => {
            let raw = fs::read_to_string(path).expect("read topology.json");
            let spec: TopologySpec = match serde_json::from_str(&raw) {
                Ok(spec) => spec,
                Err(e) => {
                    eprintln!("error: parse {}: {e}", path.display());
                    return ExitCode::FAILURE;
                }
            };
            build_network(&spec)
        }
        None => build_example(),
    };
    let mut net = match built {
        Ok(net) => net,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if args.max_rounds.is_some() {
        net.set_max_rounds(args.max_rounds);
    }

    let mut console = Console {
        quiet: args.quiet,
        viz: args.viz_json.as_ref().map(|_| {
            let mut v = VizLogger::default();
            v.emit_meta(&net);
            v
        }),
    };

    let result = net.run_convergence_with(&mut console);

    // 失败时也写出已收集的轮次，便于排查
    if let Some(path) = args.viz_json {
        if let Some(v) = console.viz.take() {
            let json = serde_json::to_string_pretty(&v.events).expect("serialize viz events");
            fs::write(&path, json).expect("write viz json");
            eprintln!("wrote viz events to {}", path.display());
        }
    }

    let report = match result {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("--- Final Routing Tables ---");
    print!("{}", render_tables(&net.routing_tables()));
    println!("done, rounds={}", report.rounds);
    ExitCode::SUCCESS
}
