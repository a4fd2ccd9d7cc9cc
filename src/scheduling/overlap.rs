/// 判断两个半开区间 `[s1, e1)` 与 `[s2, e2)` 是否重叠
///
/// 首尾相接（`e1 == s2`）不算重叠。
#[inline]
pub fn intervals_overlap(s1: i32, e1: i32, s2: i32, e2: i32) -> bool {
    s1 < e2 && s2 < e1
}
