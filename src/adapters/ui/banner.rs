//! ASCII banner with gradient (PETROX). Figlet standard font.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Petrol Blue (#0f4c81).
const PETROL_BLUE: (u8, u8, u8) = (0x0f, 0x4c, 0x81);
/// Signal Teal (#2dd4bf).
const SIGNAL_TEAL: (u8, u8, u8) = (0x2d, 0xd4, 0xbf);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// Prints the welcome banner: "PETROX" in figlet ASCII with a gradient from
/// Petrol Blue to Signal Teal, then version and the product line.
pub fn print_welcome() {
    let mut out = stdout();
    let Ok(font) = FIGfont::standard() else {
        let _ = out.execute(Print("PETROX MAILER\r\n"));
        return;
    };
    let Some(figure) = font.convert("PETROX") else {
        let _ = out.execute(Print("PETROX MAILER\r\n"));
        return;
    };
    let art = figure.to_string();
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(PETROL_BLUE, SIGNAL_TEAL, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let version = env!("CARGO_PKG_VERSION");
    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: SIGNAL_TEAL.0,
        g: SIGNAL_TEAL.1,
        b: SIGNAL_TEAL.2,
    }));
    let _ = out.execute(Print(format!("v{}\r\n", version)));
    let _ = out.execute(Print("Assessment Platform update mailer\r\n"));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}
