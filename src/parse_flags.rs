/// Flag bit for case insensitive matching (`i`)
pub const FLAG_CASEI: u32 = 1;
/// Flag bit for multi-line anchors (`m`)
pub const FLAG_MULTI: u32 = 1 << 1;
/// Flag bit for dot matching line terminators (`s`)
pub const FLAG_DOTNL: u32 = 1 << 2;
/// Flag bit for Unicode mode (`u`)
pub const FLAG_UNICODE: u32 = 1 << 3;
/// Flag bit for global matching (`g`)
pub const FLAG_GLOBAL: u32 = 1 << 4;
/// Flag bit for sticky matching (`y`)
pub const FLAG_STICKY: u32 = 1 << 5;
/// Flag bit for patterns only tested for a match, never for match bounds
pub const FLAG_MATCH_ONLY: u32 = 1 << 6;
