// Cut masks are u32, which bounds the length a sequence may be grouped at
pub const MAX_CONCAT_LEN: usize = 32;
