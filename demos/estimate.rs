use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use monte_carlo_pi::session::{ResizePolicy, Session, SessionConfig, BATCH_LARGE, BATCH_SMALL};

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Number of batches to add.
    #[arg(value_name = "INT", default_value = "10")]
    batches: usize,

    /// Use large batches (100 points) instead of small ones (10 points).
    #[clap(long)]
    large: bool,

    /// Viewport width, in pixels, used to pick the square side.
    #[clap(long, value_name = "INT", default_value = "1280")]
    width: u32,

    /// Viewport width to switch to halfway through.
    #[clap(long, value_name = "INT")]
    resize_to: Option<u32>,

    /// What to do with existing points when the side changes: keep, rescale or discard.
    #[clap(long, value_name = "POLICY", default_value = "rescale")]
    policy: ResizePolicy,

    /// Random seed (entropy-seeded if omitted).
    #[clap(long, value_name = "INT")]
    seed: Option<u64>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let args = Cli::parse();
    println!("args = {:?}", args);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let config = SessionConfig::default().with_resize_policy(args.policy);
    let mut session = Session::new(config, args.width);
    println!(
        "layout = {}, side = {}",
        session.layout(),
        session.geometry().side()
    );

    let n = if args.large { BATCH_LARGE } else { BATCH_SMALL };
    for i in 0..args.batches {
        if i == args.batches / 2 {
            if let Some(width) = args.resize_to {
                if session.resize(width) {
                    info!(
                        "Resized to {} layout, side = {}, points kept: {}",
                        session.layout(),
                        session.geometry().side(),
                        session.samples().total_count()
                    );
                }
            }
        }

        let inside = session.add_points(&mut rng, n);
        let summary = session.summary();
        info!(
            "{}: +{}/{} inside, total {}, π ≈ {}",
            session.layout().batch_label(n),
            inside,
            n,
            summary.ratio_text(),
            summary.estimate_text()
        );
    }

    let summary = session.summary();
    println!("{}", summary);
    if let Some(pi) = summary.estimate {
        println!("error = {:.6}", (pi - std::f64::consts::PI).abs());
    }

    println!("Total time: {:.3} s", time_total.elapsed().as_secs_f64());
    Ok(())
}
