use binary_search_tree::{Op, Tree};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

/// Replays insert/remove ops against an empty binary search tree and prints
/// its traversals.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Ops to apply in order, e.g. `insert:2 i:1 remove:2 r:7`. Without any
    /// ops the sample sequence `i:2 i:1 i:3 r:3 i:4` is used.
    #[arg(value_name = "OP")]
    ops: Vec<Op<i64>>,

    /// Log verbosity, repeat for more (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn sample_ops() -> Vec<Op<i64>> {
    vec![
        Op::Insert(2),
        Op::Insert(1),
        Op::Insert(3),
        Op::Remove(3),
        Op::Insert(4),
    ]
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let ops = if cli.ops.is_empty() {
        sample_ops()
    } else {
        cli.ops
    };

    let mut tree = Tree::new();
    for op in ops {
        tracing::debug!(%op, "applying");
        if !tree.apply(op) {
            tracing::info!(%op, "key not in tree, nothing removed");
        }
    }

    match tree.root() {
        Some(root) => println!(
            "root: {}, left: {:?}, right: {:?}",
            root.key(),
            root.left().map(|n| n.key()),
            root.right().map(|n| n.key())
        ),
        None => println!("root: <empty>"),
    }
    println!("len:        {}", tree.len());
    println!("height:     {}", tree.height());
    println!("inorder:    {:?}", tree.inorder());
    println!("preorder:   {:?}", tree.preorder());
    println!("postorder:  {:?}", tree.postorder());
    println!("levelorder: {:?}", tree.levelorder());
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();
}
