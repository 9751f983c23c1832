use crate::error::LoadError;

/// Size of the region the header occupies; anything shorter cannot be a
/// cartridge image.
pub const HEADER_END: usize = 0x150;

/// The bitmap the boot ROM compares against 0x0104-0x0133.
pub const NINTENDO_LOGO: [u8; 48] = [
    0xCE, 0xED, 0x66, 0x66, 0xCC, 0x0D, 0x00, 0x0B, 0x03, 0x73, 0x00, 0x83, 0x00, 0x0C, 0x00, 0x0D,
    0x00, 0x08, 0x11, 0x1F, 0x88, 0x89, 0x00, 0x0E, 0xDC, 0xCC, 0x6E, 0xE6, 0xDD, 0xDD, 0xD9, 0x99,
    0xBB, 0xBB, 0x67, 0x63, 0x6E, 0x0E, 0xEC, 0xCC, 0xDD, 0xDC, 0x99, 0x9F, 0xBB, 0xB9, 0x33, 0x3E,
];

const LOGO: usize = 0x104;
const TITLE: usize = 0x134;
const MANUFACTURER: usize = 0x13F;
const CGB_FLAG: usize = 0x143;
const NEW_LICENSEE: usize = 0x144;
const SGB_FLAG: usize = 0x146;
const CARTRIDGE_TYPE: usize = 0x147;
const ROM_SIZE: usize = 0x148;
const RAM_SIZE: usize = 0x149;
const DESTINATION: usize = 0x14A;
const OLD_LICENSEE: usize = 0x14B;
const VERSION: usize = 0x14C;
const HEADER_CHECKSUM: usize = 0x14D;
const GLOBAL_CHECKSUM: usize = 0x14E;

/// Bank controller families.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerKind {
    RomOnly,
    RomRam,
    Mbc1,
    Mbc2,
    Mbc3,
    Mbc5,
}

/// Controller plus the optional hardware advertised by the type byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CartridgeKind {
    pub controller: ControllerKind,
    pub ram: bool,
    pub battery: bool,
    pub rtc: bool,
    pub rumble: bool,
}

impl CartridgeKind {
    const fn new(controller: ControllerKind) -> Self {
        Self {
            controller,
            ram: false,
            battery: false,
            rtc: false,
            rumble: false,
        }
    }

    const fn ram(mut self) -> Self {
        self.ram = true;
        self
    }

    const fn battery(mut self) -> Self {
        self.battery = true;
        self
    }

    const fn rtc(mut self) -> Self {
        self.rtc = true;
        self
    }

    const fn rumble(mut self) -> Self {
        self.rumble = true;
        self
    }

    /// Decode the cartridge type byte at 0x0147.
    pub fn from_code(code: u8) -> Result<Self, LoadError> {
        use ControllerKind::*;

        let kind = match code {
            0x00 => Self::new(RomOnly),
            0x01 => Self::new(Mbc1),
            0x02 => Self::new(Mbc1).ram(),
            0x03 => Self::new(Mbc1).ram().battery(),
            0x05 => Self::new(Mbc2),
            0x06 => Self::new(Mbc2).battery(),
            0x08 => Self::new(RomRam).ram(),
            0x09 => Self::new(RomRam).ram().battery(),
            0x0F => Self::new(Mbc3).rtc().battery(),
            0x10 => Self::new(Mbc3).rtc().ram().battery(),
            0x11 => Self::new(Mbc3),
            0x12 => Self::new(Mbc3).ram(),
            0x13 => Self::new(Mbc3).ram().battery(),
            0x19 => Self::new(Mbc5),
            0x1A => Self::new(Mbc5).ram(),
            0x1B => Self::new(Mbc5).ram().battery(),
            0x1C => Self::new(Mbc5).rumble(),
            0x1D => Self::new(Mbc5).rumble().ram(),
            0x1E => Self::new(Mbc5).rumble().ram().battery(),
            other => return Err(LoadError::UnsupportedCartridgeKind(other)),
        };
        Ok(kind)
    }
}

/// Decoded cartridge header (0x0100-0x014F).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    pub title: String,
    pub manufacturer: [u8; 4],
    pub cgb_flag: u8,
    pub new_licensee: [u8; 2],
    pub sgb_flag: u8,
    pub cartridge_type: u8,
    pub rom_size_code: u8,
    pub ram_size_code: u8,
    pub destination: u8,
    pub old_licensee: u8,
    pub version: u8,
    pub header_checksum: u8,
    pub global_checksum: u16,
    logo: [u8; 48],
    computed_checksum: u8,
}

impl Header {
    pub fn parse(rom: &[u8]) -> Result<Self, LoadError> {
        if rom.len() < HEADER_END {
            return Err(LoadError::RomTooSmall { len: rom.len() });
        }

        let title = rom[TITLE..MANUFACTURER]
            .iter()
            .take_while(|&&byte| byte != 0)
            .map(|&byte| if byte.is_ascii_graphic() || byte == b' ' { byte as char } else { '?' })
            .collect::<String>()
            .trim_end()
            .to_string();

        let mut manufacturer = [0; 4];
        manufacturer.copy_from_slice(&rom[MANUFACTURER..CGB_FLAG]);
        let mut logo = [0; 48];
        logo.copy_from_slice(&rom[LOGO..TITLE]);

        Ok(Self {
            title,
            manufacturer,
            cgb_flag: rom[CGB_FLAG],
            new_licensee: [rom[NEW_LICENSEE], rom[NEW_LICENSEE + 1]],
            sgb_flag: rom[SGB_FLAG],
            cartridge_type: rom[CARTRIDGE_TYPE],
            rom_size_code: rom[ROM_SIZE],
            ram_size_code: rom[RAM_SIZE],
            destination: rom[DESTINATION],
            old_licensee: rom[OLD_LICENSEE],
            version: rom[VERSION],
            header_checksum: rom[HEADER_CHECKSUM],
            global_checksum: u16::from_be_bytes([rom[GLOBAL_CHECKSUM], rom[GLOBAL_CHECKSUM + 1]]),
            logo,
            computed_checksum: header_checksum(rom),
        })
    }

    pub fn kind(&self) -> Result<CartridgeKind, LoadError> {
        CartridgeKind::from_code(self.cartridge_type)
    }

    /// Declared ROM size in bytes.
    pub fn rom_size(&self) -> Result<usize, LoadError> {
        const BANK: usize = 0x4000;
        match self.rom_size_code {
            code @ 0x00..=0x08 => Ok(0x8000 << code),
            0x52 => Ok(72 * BANK),
            0x53 => Ok(80 * BANK),
            0x54 => Ok(96 * BANK),
            other => Err(LoadError::UnsupportedRomSize(other)),
        }
    }

    /// Declared external RAM size in bytes.
    pub fn ram_size(&self) -> Result<usize, LoadError> {
        match self.ram_size_code {
            0x00 => Ok(0),
            0x01 => Ok(0x800),
            0x02 => Ok(0x2000),
            0x03 => Ok(0x8000),
            0x04 => Ok(0x20000),
            0x05 => Ok(0x10000),
            other => Err(LoadError::UnsupportedRamSize(other)),
        }
    }

    /// Whether 0x0104-0x0133 holds the logo the boot ROM checks for.
    pub fn logo_matches(&self) -> bool {
        self.logo == NINTENDO_LOGO
    }

    pub fn header_checksum_matches(&self) -> bool {
        self.computed_checksum == self.header_checksum
    }

    /// True when the cartridge advertises CGB features (0x80 or 0xC0).
    pub fn supports_cgb(&self) -> bool {
        self.cgb_flag & 0x80 != 0
    }

    pub fn supports_sgb(&self) -> bool {
        self.sgb_flag == 0x03
    }

    /// Two-character licensee code; the old byte 0x33 defers to the new code.
    pub fn licensee(&self) -> String {
        if self.old_licensee == 0x33 {
            String::from_utf8_lossy(&self.new_licensee).into_owned()
        } else {
            format!("{:02X}", self.old_licensee)
        }
    }

    /// True for carts sold outside Japan.
    pub fn is_overseas(&self) -> bool {
        self.destination == 0x01
    }
}

/// Header checksum over 0x0134-0x014C: `x = x - byte - 1` for each byte.
pub fn header_checksum(rom: &[u8]) -> u8 {
    rom.get(TITLE..HEADER_CHECKSUM)
        .unwrap_or_default()
        .iter()
        .fold(0u8, |x, &byte| x.wrapping_sub(byte).wrapping_sub(1))
}

/// Sum of every ROM byte except the two global checksum bytes.
pub fn global_checksum(rom: &[u8]) -> u16 {
    rom.iter()
        .enumerate()
        .filter(|&(index, _)| index != GLOBAL_CHECKSUM && index != GLOBAL_CHECKSUM + 1)
        .fold(0u16, |sum, (_, &byte)| sum.wrapping_add(u16::from(byte)))
}
