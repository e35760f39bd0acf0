//! WMO weather codes and the dashboard theme derived from them
//!
//! The provider reports sky and precipitation conditions as WMO integer codes
//! (see <https://open-meteo.com/en/docs>). [`classify`] turns such a code plus a
//! day/night flag into everything the dashboard shows for it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Weather condition for a known WMO code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCode {
    /// WMO 0
    ClearSky,
    /// WMO 1
    MainlyClear,
    /// WMO 2
    PartlyCloudy,
    /// WMO 3
    Overcast,
    /// WMO 45
    Fog,
    /// WMO 48
    DepositingRimeFog,
    /// WMO 51
    LightDrizzle,
    /// WMO 53
    ModerateDrizzle,
    /// WMO 55
    DenseDrizzle,
    /// WMO 56
    LightFreezingDrizzle,
    /// WMO 57
    DenseFreezingDrizzle,
    /// WMO 61
    SlightRain,
    /// WMO 63
    ModerateRain,
    /// WMO 65
    HeavyRain,
    /// WMO 66
    LightFreezingRain,
    /// WMO 67
    HeavyFreezingRain,
    /// WMO 71
    SlightSnowFall,
    /// WMO 73
    ModerateSnowFall,
    /// WMO 75
    HeavySnowFall,
    /// WMO 77
    SnowGrains,
    /// WMO 80
    SlightRainShowers,
    /// WMO 81
    ModerateRainShowers,
    /// WMO 82
    ViolentRainShowers,
    /// WMO 85
    SlightSnowShowers,
    /// WMO 86
    HeavySnowShowers,
    /// WMO 95
    Thunderstorm,
    /// WMO 96
    ThunderstormWithSlightHail,
    /// WMO 99
    ThunderstormWithHeavyHail,
    /// Missing or unrecognised code
    Unknown,
}

impl WeatherCode {
    /// Every recognised code, in ascending WMO order
    pub const KNOWN: [Self; 28] = [
        Self::ClearSky,
        Self::MainlyClear,
        Self::PartlyCloudy,
        Self::Overcast,
        Self::Fog,
        Self::DepositingRimeFog,
        Self::LightDrizzle,
        Self::ModerateDrizzle,
        Self::DenseDrizzle,
        Self::LightFreezingDrizzle,
        Self::DenseFreezingDrizzle,
        Self::SlightRain,
        Self::ModerateRain,
        Self::HeavyRain,
        Self::LightFreezingRain,
        Self::HeavyFreezingRain,
        Self::SlightSnowFall,
        Self::ModerateSnowFall,
        Self::HeavySnowFall,
        Self::SnowGrains,
        Self::SlightRainShowers,
        Self::ModerateRainShowers,
        Self::ViolentRainShowers,
        Self::SlightSnowShowers,
        Self::HeavySnowShowers,
        Self::Thunderstorm,
        Self::ThunderstormWithSlightHail,
        Self::ThunderstormWithHeavyHail,
    ];

    /// Convert a WMO code; anything outside the known set is `Unknown`
    #[must_use]
    pub const fn from_wmo_code(code: i32) -> Self {
        match code {
            0 => Self::ClearSky,
            1 => Self::MainlyClear,
            2 => Self::PartlyCloudy,
            3 => Self::Overcast,
            45 => Self::Fog,
            48 => Self::DepositingRimeFog,
            51 => Self::LightDrizzle,
            53 => Self::ModerateDrizzle,
            55 => Self::DenseDrizzle,
            56 => Self::LightFreezingDrizzle,
            57 => Self::DenseFreezingDrizzle,
            61 => Self::SlightRain,
            63 => Self::ModerateRain,
            65 => Self::HeavyRain,
            66 => Self::LightFreezingRain,
            67 => Self::HeavyFreezingRain,
            71 => Self::SlightSnowFall,
            73 => Self::ModerateSnowFall,
            75 => Self::HeavySnowFall,
            77 => Self::SnowGrains,
            80 => Self::SlightRainShowers,
            81 => Self::ModerateRainShowers,
            82 => Self::ViolentRainShowers,
            85 => Self::SlightSnowShowers,
            86 => Self::HeavySnowShowers,
            95 => Self::Thunderstorm,
            96 => Self::ThunderstormWithSlightHail,
            99 => Self::ThunderstormWithHeavyHail,
            _ => Self::Unknown,
        }
    }

    /// The WMO code this condition stands for
    #[must_use]
    pub const fn wmo_code(self) -> Option<i32> {
        let code = match self {
            Self::ClearSky => 0,
            Self::MainlyClear => 1,
            Self::PartlyCloudy => 2,
            Self::Overcast => 3,
            Self::Fog => 45,
            Self::DepositingRimeFog => 48,
            Self::LightDrizzle => 51,
            Self::ModerateDrizzle => 53,
            Self::DenseDrizzle => 55,
            Self::LightFreezingDrizzle => 56,
            Self::DenseFreezingDrizzle => 57,
            Self::SlightRain => 61,
            Self::ModerateRain => 63,
            Self::HeavyRain => 65,
            Self::LightFreezingRain => 66,
            Self::HeavyFreezingRain => 67,
            Self::SlightSnowFall => 71,
            Self::ModerateSnowFall => 73,
            Self::HeavySnowFall => 75,
            Self::SnowGrains => 77,
            Self::SlightRainShowers => 80,
            Self::ModerateRainShowers => 81,
            Self::ViolentRainShowers => 82,
            Self::SlightSnowShowers => 85,
            Self::HeavySnowShowers => 86,
            Self::Thunderstorm => 95,
            Self::ThunderstormWithSlightHail => 96,
            Self::ThunderstormWithHeavyHail => 99,
            Self::Unknown => return None,
        };
        Some(code)
    }

    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Emoji shown next to the condition
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::ClearSky => "☀️",
            Self::MainlyClear => "🌤️",
            Self::PartlyCloudy => "🌥️",
            Self::Overcast => "☁️",
            Self::Fog | Self::DepositingRimeFog => "🌫️",
            Self::LightDrizzle | Self::ModerateDrizzle | Self::DenseDrizzle => "💧",
            Self::LightFreezingDrizzle | Self::DenseFreezingDrizzle => "🥶",
            Self::SlightRain | Self::ModerateRain | Self::HeavyRain => "🌧️",
            Self::LightFreezingRain | Self::HeavyFreezingRain => "🥶🌧️",
            Self::SlightSnowFall
            | Self::ModerateSnowFall
            | Self::HeavySnowFall
            | Self::SnowGrains => "❄️",
            Self::SlightRainShowers | Self::ModerateRainShowers => "🌦️",
            Self::ViolentRainShowers
            | Self::Thunderstorm
            | Self::ThunderstormWithSlightHail
            | Self::ThunderstormWithHeavyHail => "⛈️",
            Self::SlightSnowShowers | Self::HeavySnowShowers => "🌨️",
            Self::Unknown => "🤷",
        }
    }

    /// Human-readable description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::ClearSky => "Clear sky",
            Self::MainlyClear => "Mainly clear",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Overcast => "Overcast",
            Self::Fog => "Fog",
            Self::DepositingRimeFog => "Depositing rime fog",
            Self::LightDrizzle => "Light drizzle",
            Self::ModerateDrizzle => "Moderate drizzle",
            Self::DenseDrizzle => "Dense drizzle",
            Self::LightFreezingDrizzle => "Light freezing drizzle",
            Self::DenseFreezingDrizzle => "Dense freezing drizzle",
            Self::SlightRain => "Slight rain",
            Self::ModerateRain => "Moderate rain",
            Self::HeavyRain => "Heavy rain",
            Self::LightFreezingRain => "Light freezing rain",
            Self::HeavyFreezingRain => "Heavy freezing rain",
            Self::SlightSnowFall => "Slight snow fall",
            Self::ModerateSnowFall => "Moderate snow fall",
            Self::HeavySnowFall => "Heavy snow fall",
            Self::SnowGrains => "Snow grains",
            Self::SlightRainShowers => "Slight rain showers",
            Self::ModerateRainShowers => "Moderate rain showers",
            Self::ViolentRainShowers => "Violent rain showers",
            Self::SlightSnowShowers => "Slight snow showers",
            Self::HeavySnowShowers => "Heavy snow showers",
            Self::Thunderstorm => "Thunderstorm",
            Self::ThunderstormWithSlightHail => "Thunderstorm with slight hail",
            Self::ThunderstormWithHeavyHail => "Thunderstorm with heavy hail",
            Self::Unknown => "Unknown",
        }
    }

    /// Short advice for the condition
    #[must_use]
    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::ClearSky => "Perfect day for outdoor activities!",
            Self::MainlyClear => "Great day to be outside.",
            Self::PartlyCloudy => "A good day with some clouds.",
            Self::Overcast => "A bit gloomy, but still a decent day.",
            Self::Fog => "Drive carefully, visibility is low.",
            Self::DepositingRimeFog => "Be cautious of slippery surfaces.",
            Self::LightDrizzle => "A light jacket might be useful.",
            Self::ModerateDrizzle => "Bring a light raincoat.",
            Self::DenseDrizzle => "An umbrella is a good idea.",
            Self::LightFreezingDrizzle => "Watch out for icy patches.",
            Self::DenseFreezingDrizzle => "Very slippery conditions, be careful!",
            Self::SlightRain => "Don't forget your umbrella.",
            Self::ModerateRain => "A good day to stay indoors.",
            Self::HeavyRain => "Avoid going out if possible.",
            Self::LightFreezingRain => "Be extremely careful of ice.",
            Self::HeavyFreezingRain => "Hazardous conditions, stay safe.",
            Self::SlightSnowFall => "Enjoy the gentle snow!",
            Self::ModerateSnowFall => "Perfect for a snow day.",
            Self::HeavySnowFall => "Stay warm and cozy inside.",
            Self::SnowGrains => "Light snow, dress warmly.",
            Self::SlightRainShowers => "You might see a rainbow!",
            Self::ModerateRainShowers => "Intermittent rain, keep an umbrella handy.",
            Self::ViolentRainShowers => "Take shelter during the downpour.",
            Self::SlightSnowShowers => "Light and fluffy snow showers.",
            Self::HeavySnowShowers => "Heavy snow, drive safely.",
            Self::Thunderstorm => "Stay indoors and stay safe.",
            Self::ThunderstormWithSlightHail => "Possible hail, protect your vehicle.",
            Self::ThunderstormWithHeavyHail => "Severe weather, take cover.",
            Self::Unknown => "Check again later.",
        }
    }
}

impl fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Background theme of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundTheme {
    ClearDay,
    MainlyClearDay,
    PartlyCloudyDay,
    OvercastDay,
    ClearNight,
    MainlyClearNight,
    PartlyCloudyNight,
    OvercastNight,
    /// Fog, drizzle and rain (codes 40-69)
    Precipitation,
    /// Snow and showers (codes 70-89)
    Snow,
    /// Thunderstorms (codes 90 and above)
    Thunderstorm,
    /// Missing or unmatched codes
    Neutral,
}

impl BackgroundTheme {
    /// Select the theme for a code
    ///
    /// Only the clear/cloudy family (0-3) depends on the day/night flag; all
    /// other codes are grouped by their tens digit.
    #[must_use]
    pub const fn for_code(code: Option<i32>, is_day: bool) -> Self {
        let Some(code) = code else {
            return Self::Neutral;
        };
        match (code, is_day) {
            (0, true) => Self::ClearDay,
            (1, true) => Self::MainlyClearDay,
            (2, true) => Self::PartlyCloudyDay,
            (3, true) => Self::OvercastDay,
            (0, false) => Self::ClearNight,
            (1, false) => Self::MainlyClearNight,
            (2, false) => Self::PartlyCloudyNight,
            (3, false) => Self::OvercastNight,
            _ if code < 0 => Self::Neutral,
            _ => match code / 10 {
                4..=6 => Self::Precipitation,
                7..=8 => Self::Snow,
                9.. => Self::Thunderstorm,
                _ => Self::Neutral,
            },
        }
    }

    /// Gradient classes of the dashboard palette
    #[must_use]
    pub const fn gradient(self) -> &'static str {
        match self {
            Self::ClearDay => "bg-gradient-to-br from-sky-400 to-blue-600",
            Self::MainlyClearDay => "bg-gradient-to-br from-sky-300 to-blue-500",
            Self::PartlyCloudyDay => "bg-gradient-to-br from-sky-400 via-gray-400 to-sky-600",
            Self::OvercastDay => "bg-gradient-to-br from-gray-500 to-gray-700",
            Self::ClearNight => "bg-gradient-to-br from-gray-800 via-indigo-900 to-black",
            Self::MainlyClearNight => "bg-gradient-to-br from-gray-700 via-indigo-800 to-black",
            Self::PartlyCloudyNight => "bg-gradient-to-br from-gray-600 via-slate-800 to-black",
            Self::OvercastNight => "bg-gradient-to-br from-slate-700 to-slate-900",
            Self::Precipitation => "bg-gradient-to-br from-slate-400 to-slate-600",
            Self::Snow => "bg-gradient-to-br from-blue-300 to-gray-500",
            Self::Thunderstorm => "bg-gradient-to-br from-gray-700 via-purple-900 to-gray-900",
            Self::Neutral => "bg-gradient-to-br from-gray-600 to-gray-800",
        }
    }

    /// 256-colour terminal accent approximating the gradient
    #[must_use]
    pub const fn ansi_accent(self) -> u8 {
        match self {
            Self::ClearDay => 39,
            Self::MainlyClearDay => 38,
            Self::PartlyCloudyDay => 74,
            Self::OvercastDay => 245,
            Self::ClearNight => 54,
            Self::MainlyClearNight => 55,
            Self::PartlyCloudyNight => 60,
            Self::OvercastNight => 238,
            Self::Precipitation => 67,
            Self::Snow => 153,
            Self::Thunderstorm => 93,
            Self::Neutral => 244,
        }
    }

    #[must_use]
    pub const fn is_night(self) -> bool {
        matches!(
            self,
            Self::ClearNight | Self::MainlyClearNight | Self::PartlyCloudyNight | Self::OvercastNight
        )
    }
}

/// Everything the dashboard displays for a weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeatherInfo {
    pub code: WeatherCode,
    pub emoji: &'static str,
    pub description: &'static str,
    pub recommendation: &'static str,
    pub theme: BackgroundTheme,
}

/// Classify a weather code for display
///
/// Total: missing and unrecognised codes yield the "Unknown" record.
#[must_use]
pub const fn classify(code: Option<i32>, is_day: bool) -> WeatherInfo {
    let condition = match code {
        Some(code) => WeatherCode::from_wmo_code(code),
        None => WeatherCode::Unknown,
    };
    WeatherInfo {
        code: condition,
        emoji: condition.emoji(),
        description: condition.description(),
        recommendation: condition.recommendation(),
        theme: BackgroundTheme::for_code(code, is_day),
    }
}
