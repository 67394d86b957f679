use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use kurbo::{Affine, Point};
use spritecomp::{
    Argb, BlendMode, Compositor, CompositorOpts, Destination, RenderRequest, Source, alpha,
    argb_from_rgba8, from_f64, premultiply, rgba8_from_argb,
};

#[derive(Parser, Debug)]
#[command(name = "spritecomp", version)]
struct Cli {
    /// Log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw one PNG sprite onto a canvas and write the result as a PNG.
    Blit(BlitArgs),
}

#[derive(Parser, Debug)]
struct BlitArgs {
    /// Sprite PNG.
    #[arg(long)]
    src: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Blend mode (src_over, src, dst_in, dst_out, add, multiply).
    #[arg(long, default_value_t = BlendMode::SrcOver)]
    mode: BlendMode,

    /// Uniform sprite scale.
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// Sprite rotation in degrees, clockwise.
    #[arg(long, default_value_t = 0.0)]
    rotate: f64,

    /// Sprite opacity, 0-255.
    #[arg(long, default_value_t = 255)]
    alpha: i32,

    /// Bilinear filtering.
    #[arg(long)]
    bilinear: bool,

    /// Canvas width (defaults to the transformed sprite's bounds).
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height (defaults to the transformed sprite's bounds).
    #[arg(long)]
    height: Option<u32>,

    /// Canvas color, straight-alpha 0xAARRGGBB. An opaque color makes the canvas opaque.
    #[arg(long, default_value = "0x00000000", value_parser = parse_argb)]
    background: Argb,

    /// Compositor options JSON file.
    #[arg(long)]
    opts: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Blit(args) => cmd_blit(args),
    }
}

fn parse_argb(s: &str) -> Result<Argb, String> {
    let hex = s
        .trim()
        .trim_start_matches("0x")
        .trim_start_matches("0X")
        .trim_start_matches('#');
    if hex.len() != 8 {
        return Err(format!("expected 8 hex digits, got '{s}'"));
    }
    u32::from_str_radix(hex, 16)
        .map(premultiply)
        .map_err(|e| format!("invalid color '{s}': {e}"))
}

fn read_opts(path: Option<&Path>) -> anyhow::Result<CompositorOpts> {
    let Some(path) = path else {
        return Ok(CompositorOpts::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("read options '{}'", path.display()))?;
    Ok(CompositorOpts::from_json_str(&json)?)
}

fn cmd_blit(args: BlitArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.scale.is_finite() && args.scale > 0.0,
        "scale must be a positive number"
    );
    anyhow::ensure!(args.rotate.is_finite(), "rotation must be finite");

    let sprite = image::open(&args.src)
        .with_context(|| format!("open sprite '{}'", args.src.display()))?
        .to_rgba8();
    let (sw, sh) = sprite.dimensions();
    let pixels = argb_from_rgba8(&sprite);
    let opaque = pixels.iter().all(|&p| alpha(p) == 0xFF);
    let src = Source::new(&pixels, sw, sh, opaque)?;

    let theta = args.rotate.to_radians();
    let place = Affine::rotate(theta) * Affine::scale(args.scale);
    let bounds =
        place.transform_rect_bbox(kurbo::Rect::new(0.0, 0.0, f64::from(sw), f64::from(sh)));
    let width = args.width.unwrap_or(bounds.width().ceil().max(1.0) as u32);
    let height = args.height.unwrap_or(bounds.height().ceil().max(1.0) as u32);

    // Sprite center lands on the canvas center.
    let forward = Affine::translate((f64::from(width) / 2.0, f64::from(height) / 2.0))
        * place
        * Affine::translate((-f64::from(sw) / 2.0, -f64::from(sh) / 2.0));

    let mut canvas = vec![args.background; width as usize * height as usize];
    let mut dst = Destination::new(&mut canvas, width as usize, alpha(args.background) == 0xFF)?;

    let opts = read_opts(args.opts.as_deref())?;
    let walk = SpriteWalk {
        inverse: forward.inverse(),
        sprite: (f64::from(sw), f64::from(sh)),
        canvas: (width as usize, height as usize),
        bilinear: args.bilinear,
        alpha: args.alpha,
    };
    let requests = walk.requests();
    tracing::debug!(count = requests.len(), mode = %args.mode, "issuing draw requests");

    let compositor = Compositor::new(opts);
    for req in &requests {
        compositor.draw(args.mode, &src, req, &mut dst)?;
    }

    let out = rgba8_from_argb(&canvas, width, height)?;
    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    out.save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

/// Turns a canvas-to-sprite mapping into row requests, the way a scene renderer would.
struct SpriteWalk {
    inverse: Affine,
    sprite: (f64, f64),
    canvas: (usize, usize),
    bilinear: bool,
    alpha: i32,
}

const AXIS_EPSILON: f64 = 1e-9;

impl SpriteWalk {
    fn requests(&self) -> Vec<RenderRequest> {
        let [a, b, c, d, _, _] = self.inverse.as_coeffs();
        // Bilinear sampling centers texels on integer coordinates.
        let off = if self.bilinear { 0.5 } else { 0.0 };
        let origin = self.inverse * Point::new(0.5, 0.5);
        let (u0, v0) = (origin.x - off, origin.y - off);
        let (sw, sh) = self.sprite;

        if b.abs() < AXIS_EPSILON && c.abs() < AXIS_EPSILON {
            let (xs, xe) = self.span(inside(origin.x, a, sw), self.canvas.0);
            let (ys, ye) = self.span(inside(origin.y, d, sh), self.canvas.1);
            if xs >= xe || ys >= ye {
                return Vec::new();
            }
            let req = RenderRequest::new(ys * self.canvas.0 + xs, (xe - xs) as i32)
                .with_origin(
                    from_f64(u0 + xs as f64 * a),
                    from_f64(v0 + ys as f64 * d),
                )
                .with_step(from_f64(a), from_f64(d))
                .with_rows((ye - ys) as i32)
                .with_bilinear(self.bilinear)
                .with_alpha(self.alpha);
            return vec![req];
        }

        let mut out = Vec::new();
        for y in 0..self.canvas.1 {
            let (ru, rv) = (u0 + y as f64 * c, v0 + y as f64 * d);
            let (ulo, uhi) = inside(ru + off, a, sw);
            let (vlo, vhi) = inside(rv + off, b, sh);
            let (xs, xe) = self.span((ulo.max(vlo), uhi.min(vhi)), self.canvas.0);
            if xs >= xe {
                continue;
            }
            out.push(
                RenderRequest::new(y * self.canvas.0 + xs, (xe - xs) as i32)
                    .with_origin(from_f64(ru + xs as f64 * a), from_f64(rv + xs as f64 * b))
                    .with_step(from_f64(a), from_f64(b))
                    .with_rotation(true)
                    .with_bilinear(self.bilinear)
                    .with_alpha(self.alpha),
            );
        }
        out
    }

    /// Whole pixels `[start, end)` of a real interval, clipped to `0..limit`.
    fn span(&self, (lo, hi): (f64, f64), limit: usize) -> (usize, usize) {
        let clip = |x: f64| x.ceil().clamp(0.0, limit as f64) as usize;
        (clip(lo), clip(hi))
    }
}

/// Real `x` interval where `start + x * step` stays inside `[0, len)`.
fn inside(start: f64, step: f64, len: f64) -> (f64, f64) {
    if step.abs() < AXIS_EPSILON {
        return if (0.0..len).contains(&start) {
            (f64::NEG_INFINITY, f64::INFINITY)
        } else {
            (0.0, 0.0)
        };
    }
    let a = -start / step;
    let b = (len - start) / step;
    (a.min(b), a.max(b))
}
