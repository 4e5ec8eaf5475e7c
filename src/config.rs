use crate::GameError;

pub const MIN_SIDE: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u32,
    pub height: u32,
    pub mines: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 9,
            height: 9,
            mines: 10,
        }
    }
}

impl GameConfig {
    pub fn new(width: u32, height: u32, mines: u32) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    /// Builds a config from untyped numbers, e.g. decoded from JSON.
    ///
    /// Size and mine count are range checked before wholeness, so a 4.5 wide
    /// board is too small and 0.5 mines is too few. Values reported in errors
    /// are truncated and saturated to `u32`.
    pub fn from_f64(width: f64, height: f64, mines: f64) -> Result<Self, GameError> {
        let config = Self::new(width as u32, height as u32, mines as u32);

        if width < f64::from(MIN_SIDE) || height < f64::from(MIN_SIDE) {
            return Err(GameError::InvalidDimensions {
                width: config.width,
                height: config.height,
            });
        }
        if mines < 1.0 || mines >= width * height {
            return Err(GameError::InvalidMineCount {
                width: config.width,
                height: config.height,
                mines: config.mines,
            });
        }
        if ![width, height, mines].into_iter().all(is_whole) {
            return Err(GameError::NonIntegerInput);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.width < MIN_SIDE || self.height < MIN_SIDE {
            return Err(GameError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.mines < 1 || u64::from(self.mines) >= self.total_cells() {
            return Err(GameError::InvalidMineCount {
                width: self.width,
                height: self.height,
                mines: self.mines,
            });
        }
        Ok(())
    }

    pub fn total_cells(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

pub(crate) fn is_whole(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}
