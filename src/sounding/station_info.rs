use optional::Optioned;

/// Label used when a station has no name.
pub const UNKNOWN_STATION: &str = "Unknown location";

/// Station identification. This is metadata only, the analysis never looks at it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StationInfo {
    /// station number, USAF number, eg 727730
    num: Optioned<i32>,
    /// Human readable name, eg "Port Hardy"
    name: Option<String>,
}

impl StationInfo {
    /// Create a new object with default values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sounding_convection::StationInfo;
    ///
    /// assert!(StationInfo::new().station_num().is_none());
    /// assert!(StationInfo::new().name().is_none());
    /// assert_eq!(StationInfo::new().label(), "Unknown location");
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add a station number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sounding_convection::StationInfo;
    ///
    /// assert_eq!(StationInfo::new().with_station(71109).station_num().unwrap(), 71109);
    /// assert_eq!(StationInfo::new().with_station(Some(71109)).station_num().unwrap(), 71109);
    /// ```
    #[inline]
    pub fn with_station<T>(mut self, number: T) -> Self
    where
        Optioned<i32>: From<T>,
    {
        self.num = Optioned::from(number);
        self
    }

    /// Builder method to add a station name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sounding_convection::StationInfo;
    ///
    /// let stn = StationInfo::new().with_name("Port Hardy".to_owned());
    /// assert_eq!(stn.name().unwrap(), "Port Hardy");
    /// assert_eq!(stn.label(), "Port Hardy");
    ///
    /// let stn = stn.with_name(None);
    /// assert!(stn.name().is_none());
    /// ```
    #[inline]
    pub fn with_name<S>(mut self, name: S) -> Self
    where
        Option<String>: From<S>,
    {
        self.name = Option::from(name);
        self
    }

    /// Station number, USAF format, e.g. 727730
    #[inline]
    pub fn station_num(&self) -> Optioned<i32> {
        self.num
    }

    /// The station name, if it has one.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The station name, or a placeholder label if it was never set.
    #[inline]
    pub fn label(&self) -> &str {
        self.name().unwrap_or(UNKNOWN_STATION)
    }
}
