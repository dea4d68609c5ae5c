use anyhow::{ensure, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Instant,
};
use structopt::StructOpt;
use tracing::{debug, info, warn};
use tracing_subscriber::layer::SubscriberExt;

mod config;
mod decode;
mod error;
mod pipeline;
mod point;
mod pose;
mod sim;
mod skeleton;
mod track;

use pipeline::Renderer;
use point::Point;
use pose::KeypointKind;
use skeleton::Bone;

/// Renderer collaborator for the demo: reports draw calls through tracing
/// instead of a screen.
struct LogRenderer {
    line_width: f32,
}

impl Renderer for LogRenderer {
    fn place_joint(&mut self, joint: usize, position: Point) {
        let name = KeypointKind::from_idx(joint)
            .map(KeypointKind::name)
            .unwrap_or("joint");
        debug!(
            message = "joint",
            name = name,
            joint = joint,
            x = f64::from(position.x),
            y = f64::from(position.y),
        );
    }

    fn hide_joint(&mut self, joint: usize) {
        debug!(message = "joint hidden", joint = joint);
    }

    fn draw_bone(&mut self, bone: &Bone, start: Point, end: Point) {
        debug!(
            message = "bone",
            name = %bone.name(),
            color = ?bone.category.color(),
            width = f64::from(self.line_width),
            start_x = f64::from(start.x),
            start_y = f64::from(start.y),
            end_x = f64::from(end.x),
            end_y = f64::from(end.y),
        );
    }

    fn hide_bone(&mut self, bone: &Bone) {
        debug!(message = "bone hidden", name = %bone.name());
    }
}

#[derive(structopt::StructOpt)]
struct Opt {
    #[structopt(flatten)]
    config: config::Config,

    /// Number of synthetic frames to process.
    #[structopt(short, long, default_value = "300")]
    frames: usize,

    /// Rows and columns of the synthetic heatmap grid.
    #[structopt(long, default_value = "16")]
    heatmap_size: usize,

    #[structopt(short, long, default_value = "info", env = "RUST_LOG")]
    log_level: tracing_subscriber::filter::EnvFilter,

    #[structopt(short, long)]
    show_progress: bool,
}

fn main() -> Result<()> {
    let opt = Opt::from_args();

    tracing::subscriber::set_global_default(
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(opt.log_level),
    )?;

    ensure!(opt.heatmap_size > 0, "heatmap size must be nonzero");

    let mut pipeline =
        pipeline::Pipeline::new(&opt.config).context("failed constructing pipeline")?;
    let mut source = sim::SyntheticSource::new(opt.heatmap_size, opt.config.joint_count);
    let mut renderer = LogRenderer {
        line_width: opt.config.line_width,
    };

    let running = Arc::new(AtomicBool::new(true));
    let running_ctrl_c = running.clone();
    ctrlc::set_handler(move || {
        running_ctrl_c.store(false, Ordering::SeqCst);
    })
    .context("failed setting Ctrl-C handler")?;

    let pb = if opt.show_progress {
        Some(
            ProgressBar::new_spinner().with_style(
                ProgressStyle::default_spinner()
                    .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
                    .template("{prefix:.bold.dim} {spinner} {wide_msg}"),
            ),
        )
    } else {
        None
    };

    // The demo displays at twice the network input resolution.
    let texture = (
        2.0 * f32::from(opt.config.image_width),
        2.0 * f32::from(opt.config.image_height),
    );

    info!(
        message = "starting frame loop",
        frames = opt.frames,
        joint_count = opt.config.joint_count,
        texture_width = f64::from(texture.0),
        texture_height = f64::from(texture.1),
    );

    let start = Instant::now();
    for _ in 0..opt.frames {
        if !running.load(Ordering::SeqCst) {
            break;
        }

        let heatmap = source.next_heatmap();
        if let Err(e) = pipeline.process_frame(heatmap.view(), texture, &mut renderer) {
            // Frame-local failure; the tracker recovers on the next tick.
            warn!(message = "dropping frame", error = %e);
            continue;
        }

        if let Some(pb) = &pb {
            pb.set_message(format!(
                "FPS => {:.1}",
                pipeline.frame_num() as f64 / start.elapsed().as_secs_f64()
            ));
            pb.inc(1);
        }
    }

    info!(
        message = "done",
        frames = pipeline.frame_num(),
        elapsed = ?start.elapsed(),
    );
    Ok(())
}
