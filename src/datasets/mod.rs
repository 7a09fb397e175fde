use core::fmt;

use _model::Record;
use clap::ValueEnum;

mod foreign_tokyo50;
mod japan_top200;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Dataset {
    #[value(name = "japan-top200")]
    JapanTop200,
    #[value(name = "foreign-tokyo50")]
    ForeignTokyo50,
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Dataset {
    pub fn all() -> Vec<Self> {
        vec![Dataset::JapanTop200, Dataset::ForeignTokyo50]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::JapanTop200 => "Japan Top200",
            Self::ForeignTokyo50 => "Foreign Tokyo 50",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Self::JapanTop200 => "japan_top200_mymaps.csv",
            Self::ForeignTokyo50 => "foreign_tokyo50_mymaps.csv",
        }
    }

    pub fn records(&self) -> &'static [Record<'static>] {
        match self {
            Self::JapanTop200 => japan_top200::RECORDS,
            Self::ForeignTokyo50 => foreign_tokyo50::RECORDS,
        }
    }

    /// Most rows the list is meant to hold.
    pub fn capacity(&self) -> usize {
        match self {
            Self::JapanTop200 => 200,
            Self::ForeignTokyo50 => 50,
        }
    }

    /// Every address query in the list ends with this word, so the geocoder
    /// lands on the head office (Japanese companies) or the Tokyo branch
    /// (foreign companies) rather than a random store.
    pub fn query_suffix(&self) -> &'static str {
        match self {
            Self::JapanTop200 => "本社",
            Self::ForeignTokyo50 => "東京オフィス",
        }
    }
}
