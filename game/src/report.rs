use backend::pixels::Rect;
use backend::system::{RendererFlags, RendererInfo};

fn yes_no(set: bool) -> &'static str {
    if set {
        "True"
    } else {
        "False"
    }
}

pub fn window_opening(w: usize, h: usize) -> String {
    format!("Open game window: {w}x{h}... ")
}

pub fn renderer_info(info: &RendererInfo) -> String {
    let mut text = String::from("Renderer info:\n");
    text += &format!("\tname: {}\n", info.name);
    text += "\tSupported SDL_RendererFlags:\n";
    for (label, flag) in [
        ("SDL_RENDERER_SOFTWARE", RendererFlags::SOFTWARE),
        ("SDL_RENDERER_ACCELERATED", RendererFlags::ACCELERATED),
        ("SDL_RENDERER_PRESENTVSYNC", RendererFlags::PRESENTVSYNC),
        ("SDL_RENDERER_TARGETTEXTURE", RendererFlags::TARGETTEXTURE),
    ] {
        text += &format!("\t\t{label}: {}\n", yes_no(info.flags.contains(flag)));
    }
    text += &format!(
        "\tNumber of available texture formats: {}\n",
        info.texture_formats
    );
    text += &format!("\tMax texture width: {}\n", info.max_texture_width);
    text += &format!("\tMax texture height: {}\n", info.max_texture_height);
    text
}

pub fn position(rect: &Rect) -> String {
    format!("me (x,y) = ({}, {})\n", rect.x, rect.y)
}
