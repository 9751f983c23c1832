use typed_builder::TypedBuilder;

/// Machine construction options.
///
/// ```
/// use dmgboy_core::GameBoyConfig;
///
/// let config = GameBoyConfig::builder().lock_vram_oam(true).build();
/// assert!(config.boot_rom.is_none());
/// ```
#[derive(Clone, Debug, TypedBuilder)]
pub struct GameBoyConfig {
    /// Raw boot ROM image. When absent the machine starts from the
    /// post-boot register state at PC=0x0100.
    #[builder(default, setter(strip_option))]
    pub boot_rom: Option<Vec<u8>>,
    /// Block CPU access to VRAM during mode 3 and to OAM during modes 2/3.
    #[builder(default = false)]
    pub lock_vram_oam: bool,
    /// Charge the 160 machine cycles an OAM DMA transfer takes on hardware.
    #[builder(default = true)]
    pub oam_dma_stall: bool,
    /// Fill work RAM and high RAM with pseudo-random bytes at power-on.
    #[builder(default = true)]
    pub randomize_ram: bool,
    /// Seed for the power-on RAM pattern.
    #[builder(default = 0xC0DE_1234)]
    pub ram_seed: u64,
}

impl Default for GameBoyConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
