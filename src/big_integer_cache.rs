use lazy_static::*;

lazy_static! {
    /// Double dabble correction for a packed BCD byte: each nibble `>= 5` gets `+3`.
    pub static ref BCD_ADD3: [u8; 256] = {
        let mut table = [0_u8; 256];
        for (byte, slot) in table.iter_mut().enumerate() {
            let mut low = (byte as u8) & 0x0f;
            let mut high = (byte as u8) >> 4;
            if low >= 5 {
                low += 3;
            }
            if high >= 5 {
                high += 3;
            }
            *slot = ((high & 0x0f) << 4) | (low & 0x0f);
        }
        table
    };
    /// Reverse double dabble correction for a packed BCD byte: each nibble `>= 8` gets `-3`.
    pub static ref BCD_SUB3: [u8; 256] = {
        let mut table = [0_u8; 256];
        for (byte, slot) in table.iter_mut().enumerate() {
            let mut low = (byte as u8) & 0x0f;
            let mut high = (byte as u8) >> 4;
            if low >= 8 {
                low -= 3;
            }
            if high >= 8 {
                high -= 3;
            }
            *slot = (high << 4) | low;
        }
        table
    };
}
