//! 课块配色
//!
//! 颜色只由标签决定，同一教学班在一次渲染中总是同一种颜色。

/// 课块调色板
pub const BLOCK_PALETTE: [&str; 10] = [
    "#5B8FF9", "#5AD8A6", "#F6BD16", "#E8684A", "#6DC8EC", "#9270CA", "#FF9D4D", "#269A99",
    "#FF99C3", "#5D7092",
];

/// `Σ UTF-16 码元 mod palette_size`，调色板为空时返回 0
pub fn color_index(label: &str, palette_size: usize) -> usize {
    if palette_size == 0 {
        return 0;
    }
    let sum: u64 = label.encode_utf16().map(u64::from).sum();
    (sum % palette_size as u64) as usize
}

pub fn block_color(label: &str) -> &'static str {
    BLOCK_PALETTE[color_index(label, BLOCK_PALETTE.len())]
}
