//! catan-optimum -- ranks Settlers of Catan intersections by expected yield.
//!
//! `show` prints a board; `rank` scores its intersections (or pairs of
//! intersections) under one metric and prints the best entries.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::warn;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use catan_optimum::board::{Board, Port, Tile, DEFAULT_SEED, NODE_COUNT};
use catan_optimum::protocol::{encode_ports, encode_tiles, parse_board, parse_needs, parse_ports};
use catan_optimum::rank::{rank, Metric, RankConfig, Ranked, DEFAULT_LIMIT};

#[derive(Parser, Debug)]
#[command(author, version, about = "Settlers of Catan optimum intersection finder")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the tiles and ports of a board.
    Show {
        #[command(flatten)]
        board: BoardArgs,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Rank intersections by a metric.
    Rank {
        #[command(flatten)]
        board: BoardArgs,
        /// Metric: dot-count, hit-frequency, resource-rate,
        /// resource-rate-with-trades, resource-needs.
        #[arg(long, default_value = "dot-count")]
        metric: Metric,
        /// Score pairs of non-adjacent intersections.
        #[arg(long)]
        pairwise: bool,
        /// Number of entries to print.
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
        /// Resource needs, e.g. "lumber=4,brick=4,grain=2". Defaults to 10 each.
        #[arg(long)]
        needs: Option<String>,
        /// Intersections already settled, e.g. "12,30".
        #[arg(long, value_delimiter = ',')]
        claim: Vec<usize>,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

/// Options selecting the board to work on.
#[derive(Args, Debug)]
struct BoardArgs {
    /// Seed for a random standard board.
    #[arg(long, default_value = DEFAULT_SEED)]
    seed: String,
    /// Explicit tiles: 19 entries "resource:number" or "desert", comma-separated.
    #[arg(long, conflicts_with = "seed")]
    tiles: Option<String>,
    /// Port layout: 9 entries "kind:a-b", comma-separated.
    #[arg(long)]
    ports: Option<String>,
}

impl BoardArgs {
    fn build(&self) -> Result<Board> {
        let mut board = match &self.tiles {
            Some(tiles) => parse_board(tiles).context("invalid --tiles")?,
            None => Board::random_board(&self.seed),
        };
        if let Some(ports) = &self.ports {
            let layout = parse_ports(ports).context("invalid --ports")?;
            board
                .set_port_layout(&layout)
                .context("invalid --ports")?;
        }
        Ok(board)
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Show { board, json } => handle_show(&board, json),
        Command::Rank {
            board,
            metric,
            pairwise,
            limit,
            needs,
            claim,
            json,
        } => {
            let mut config = RankConfig {
                metric,
                pairwise,
                limit,
                ..RankConfig::default()
            };
            if let Some(needs) = needs {
                config.needs = parse_needs(&needs).context("invalid --needs")?;
            }
            handle_rank(&board, &config, &claim, json)
        }
    }
}

#[derive(Serialize)]
struct BoardReport<'a> {
    tiles: &'a [Tile],
    ports: &'a [Port],
    tile_notation: String,
    port_notation: String,
}

fn handle_show(args: &BoardArgs, json: bool) -> Result<()> {
    let board = args.build()?;

    if json {
        let report = BoardReport {
            tiles: board.tiles(),
            ports: board.ports(),
            tile_notation: encode_tiles(&board),
            port_notation: encode_ports(&board),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Tiles:");
    for (i, tile) in board.tiles().iter().enumerate() {
        match (tile.resource, tile.number) {
            (Some(r), Some(n)) => println!("{:>3}  {:<7}{:>3}  ({} dots)", i, r, n, tile.dots()),
            _ => println!("{:>3}  desert", i),
        }
    }
    println!("Ports:");
    for port in board.ports() {
        println!(
            "{:>3}  {:<7}{:>3}-{}",
            port.index, port.kind, port.nodes.0, port.nodes.1
        );
    }
    println!("tiles: {}", encode_tiles(&board));
    println!("ports: {}", encode_ports(&board));
    Ok(())
}

fn handle_rank(args: &BoardArgs, config: &RankConfig, claim: &[usize], json: bool) -> Result<()> {
    let mut board = args.build()?;
    for &node in claim {
        if node >= NODE_COUNT {
            bail!("--claim: node {} out of range (board has {} nodes)", node, NODE_COUNT);
        }
        if !board.claim(node) {
            warn!(node, "intersection already unavailable, claim ignored");
        }
    }

    let ranked = rank(&board, config);

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else {
        print_ranking(config, &ranked);
    }
    Ok(())
}

fn print_ranking(config: &RankConfig, ranked: &[Ranked]) {
    let scope = if config.pairwise { "pairwise" } else { "single" };
    println!("Metric: {} ({})", config.metric, scope);
    println!("{:>10}  Score", "ID");
    for r in ranked {
        println!("{:>10}  {:.2}", r.placement.to_string(), r.score);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
