use thiserror::Error;

/// Packed RGBA8888 color, `0xRRGGBBAA`.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Color(pub u32);

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color((r as u32) << 24 | (g as u32) << 16 | (b as u32) << 8 | a as u32)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Rect {
        Rect { x, y, w, h }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrawError {
    #[error("rect {rect:?} does not fit into {width}x{height} pixel buffer")]
    OutOfBounds {
        rect: Rect,
        width: usize,
        height: usize,
    },
}

/// Software frame: `width * height` pixels, row stride equal to `width`.
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        PixelBuffer {
            width,
            height,
            pixels: vec![Color::default(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row stride in bytes, as expected by texture uploads.
    pub fn pitch(&self) -> usize {
        self.width * std::mem::size_of::<Color>()
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Overwrites every pixel inside `rect`. A rect that does not lie fully
    /// inside the buffer is rejected and nothing is written.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), DrawError> {
        let (x, y, w, h) = self.checked_bounds(rect)?;
        for row in y..y + h {
            let start = row * self.width + x;
            self.pixels[start..start + w].fill(color);
        }
        Ok(())
    }

    fn checked_bounds(&self, rect: Rect) -> Result<(usize, usize, usize, usize), DrawError> {
        let out_of_bounds = DrawError::OutOfBounds {
            rect,
            width: self.width,
            height: self.height,
        };
        if rect.x < 0 || rect.y < 0 || rect.w < 0 || rect.h < 0 {
            return Err(out_of_bounds);
        }
        let (x, y, w, h) = (
            rect.x as usize,
            rect.y as usize,
            rect.w as usize,
            rect.h as usize,
        );
        if x + w > self.width || y + h > self.height {
            return Err(out_of_bounds);
        }
        Ok((x, y, w, h))
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        // Color is a transparent u32, so the pixel vector is plain bytes.
        unsafe {
            std::slice::from_raw_parts(
                self.pixels.as_ptr().cast::<u8>(),
                std::mem::size_of_val(self.pixels.as_slice()),
            )
        }
    }
}
