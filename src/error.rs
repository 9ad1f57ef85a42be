use std::fmt;

/// A segment in a field identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum PathSegment {
    /// Object field name.
    Field(String),
    /// Collection index.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, ".{}", name),
            PathSegment::Index(idx) => write!(f, "[{}]", idx),
        }
    }
}

/// Identifies the value a failure concerns, e.g. `user.tags[2]`.
///
/// Rules never interpret the identifier; they only copy it into the
/// metadata of the failures they record.
///
/// # Example
/// ```
/// use fluent_rules::error::Identifier;
///
/// let id = Identifier::field("user").child("tags").index(2);
/// assert_eq!(id.to_string(), "user.tags[2]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Identifier {
    segments: Vec<PathSegment>,
}

impl Identifier {
    /// The identifier of the value under validation itself (no path).
    pub fn root() -> Self {
        Self { segments: vec![] }
    }

    /// An identifier made of a single field name.
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Field(name.into())],
        }
    }

    /// Append a field segment.
    pub fn child(mut self, name: impl Into<String>) -> Self {
        self.segments.push(PathSegment::Field(name.into()));
        self
    }

    /// Append an index segment.
    pub fn index(mut self, idx: usize) -> Self {
        self.segments.push(PathSegment::Index(idx));
        self
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path: String = self.segments.iter().map(|s| s.to_string()).collect();
        f.write_str(path.strip_prefix('.').unwrap_or(&path))
    }
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        Identifier::field(name)
    }
}

impl From<String> for Identifier {
    fn from(name: String) -> Self {
        Identifier::field(name)
    }
}

// ---------------------------------------------------------------------------
// Failure codes
// ---------------------------------------------------------------------------

macro_rules! failure_codes {
    (
        $(#[$meta:meta])*
        $name:ident, $prefix:literal {
            $( $variant:ident => $key:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serialize", derive(serde::Serialize))]
        pub enum $name {
            $( $variant, )+
        }

        impl $name {
            /// Stable key of this code, prefixed with its domain.
            pub fn key(&self) -> &'static str {
                match self {
                    $( $name::$variant => concat!($prefix, ".", $key), )+
                }
            }
        }
    };
}

failure_codes! {
    /// Failures recorded by [`primitives::object`](crate::primitives::object) rules.
    ObjectCode, "object" {
        NotNull => "not_null",
        MustBeNull => "must_be_null",
        EqualTo => "equal_to",
        NotEqualTo => "not_equal_to",
        SameInstance => "same_instance",
        NotSameInstance => "not_same_instance",
        Satisfies => "satisfies",
        InstanceOf => "instance_of",
        NotInstanceOf => "not_instance_of",
    }
}

failure_codes! {
    /// Failures recorded by [`primitives::string`](crate::primitives::string) rules.
    StringCode, "string" {
        NotBlank => "not_blank",
        MinLength => "min_length",
        MaxLength => "max_length",
        ExactLength => "exact_length",
        LengthBetween => "length_between",
        Pattern => "pattern",
        In => "in",
        InIgnoreCase => "in_ignore_case",
        StartsWith => "starts_with",
        EndsWith => "ends_with",
        Contains => "contains",
        Numeric => "numeric",
        Alphanumeric => "alphanumeric",
        UpperCase => "upper_case",
        LowerCase => "lower_case",
        NoWhitespace => "no_whitespace",
        NoLeadingWhitespace => "no_leading_whitespace",
        NoTrailingWhitespace => "no_trailing_whitespace",
        NoConsecutiveWhitespace => "no_consecutive_whitespace",
        Trimmed => "trimmed",
        ProperSpacing => "proper_spacing",
    }
}

failure_codes! {
    /// Failures recorded by [`primitives::number`](crate::primitives::number) rules.
    NumberCode, "number" {
        Min => "min",
        Max => "max",
        Range => "range",
        Positive => "positive",
        Negative => "negative",
        NonZero => "non_zero",
        NonNegative => "non_negative",
        NonPositive => "non_positive",
    }
}

failure_codes! {
    /// Failures recorded by [`collections::collection`](crate::collections::collection) rules.
    CollectionCode, "collection" {
        NotEmpty => "not_empty",
        Empty => "empty",
        MinSize => "min_size",
        MaxSize => "max_size",
        ExactSize => "exact_size",
        SizeRange => "size_range",
        AllMatch => "all_match",
        AnyMatch => "any_match",
        NoneMatch => "none_match",
        NoDuplicates => "no_duplicates",
        Contains => "contains",
        DoesNotContain => "does_not_contain",
        ContainsAll => "contains_all",
        ContainsNone => "contains_none",
    }
}

failure_codes! {
    /// Failures recorded by [`collections::map`](crate::collections::map) rules.
    MapCode, "map" {
        NotEmpty => "not_empty",
        Empty => "empty",
        MinSize => "min_size",
        MaxSize => "max_size",
        ExactSize => "exact_size",
        SizeRange => "size_range",
        ContainsKey => "contains_key",
        DoesNotContainKey => "does_not_contain_key",
        ContainsValue => "contains_value",
        DoesNotContainValue => "does_not_contain_value",
        AllKeysMatch => "all_keys_match",
        AnyKeyMatches => "any_key_matches",
        NoKeyMatches => "no_key_matches",
        AllValuesMatch => "all_values_match",
        AnyValueMatches => "any_value_matches",
        NoValueMatches => "no_value_matches",
        AllEntriesMatch => "all_entries_match",
        AnyEntryMatches => "any_entry_matches",
        NoEntryMatches => "no_entry_matches",
        ContainsAllKeys => "contains_all_keys",
    }
}

failure_codes! {
    /// Failures recorded by date rules.
    DateCode, "date" {
        Between => "between",
        Before => "before",
        After => "after",
        BeforeOrEqual => "before_or_equal",
        AfterOrEqual => "after_or_equal",
        EqualTo => "equal_to",
        Future => "future",
        Past => "past",
        PresentOrFuture => "present_or_future",
        PresentOrPast => "present_or_past",
        Weekday => "weekday",
        Weekend => "weekend",
        InMonth => "in_month",
        InYear => "in_year",
    }
}

failure_codes! {
    /// Failures recorded by time-of-day rules.
    TimeCode, "time" {
        Between => "between",
        Before => "before",
        After => "after",
        BeforeOrEqual => "before_or_equal",
        AfterOrEqual => "after_or_equal",
        EqualTo => "equal_to",
        Morning => "morning",
        Afternoon => "afternoon",
        Evening => "evening",
        BusinessHours => "business_hours",
        LunchHour => "lunch_hour",
        HoursBetween => "hours_between",
        MinutesBetween => "minutes_between",
        SecondsBetween => "seconds_between",
        InTimezone => "in_timezone",
    }
}

failure_codes! {
    /// Failures recorded by [`primitives::allowed`](crate::primitives::allowed) rules.
    AllowedCode, "allowed" {
        InSet => "in_set",
        OneOf => "one_of",
        NotInSet => "not_in_set",
        NoneOf => "none_of",
        InEnum => "in_enum",
    }
}

/// Rule kind that produced a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum FailureCode {
    Object(ObjectCode),
    String(StringCode),
    Number(NumberCode),
    Collection(CollectionCode),
    Map(MapCode),
    Date(DateCode),
    Time(TimeCode),
    Allowed(AllowedCode),
}

impl FailureCode {
    /// Stable string key for this code, e.g. `"collection.min_size"`.
    /// Useful for i18n and error mapping.
    pub fn key(&self) -> &'static str {
        match self {
            FailureCode::Object(c) => c.key(),
            FailureCode::String(c) => c.key(),
            FailureCode::Number(c) => c.key(),
            FailureCode::Collection(c) => c.key(),
            FailureCode::Map(c) => c.key(),
            FailureCode::Date(c) => c.key(),
            FailureCode::Time(c) => c.key(),
            FailureCode::Allowed(c) => c.key(),
        }
    }
}

macro_rules! impl_from_code {
    ($($code:ident => $variant:ident),+ $(,)?) => {
        $(
            impl From<$code> for FailureCode {
                fn from(code: $code) -> Self {
                    FailureCode::$variant(code)
                }
            }
        )+
    };
}

impl_from_code! {
    ObjectCode => Object,
    StringCode => String,
    NumberCode => Number,
    CollectionCode => Collection,
    MapCode => Map,
    DateCode => Date,
    TimeCode => Time,
    AllowedCode => Allowed,
}

impl fmt::Display for FailureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// Metadata / Failure
// ---------------------------------------------------------------------------

/// Descriptor of a failed rule: which value, which rule kind, a rendered
/// English message, and the parameters needed to render it again (bounds,
/// reference values, actual sizes).
///
/// Built by the constructor functions in [`crate::metadata`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Metadata {
    pub identifier: Identifier,
    pub code: FailureCode,
    pub message: String,
    pub params: Vec<(&'static str, String)>,
}

impl Metadata {
    pub fn new(
        identifier: &Identifier,
        code: impl Into<FailureCode>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.clone(),
            code: code.into(),
            message: message.into(),
            params: vec![],
        }
    }

    /// Attach a message parameter.
    pub fn param(mut self, key: &'static str, value: impl ToString) -> Self {
        self.params.push((key, value.to_string()));
        self
    }

    /// Look up a parameter by key.
    pub fn get_param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A single recorded validation failure.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Failure {
    pub metadata: Metadata,
}

impl Failure {
    pub fn new(metadata: Metadata) -> Self {
        Self { metadata }
    }

    pub fn identifier(&self) -> &Identifier {
        &self.metadata.identifier
    }

    pub fn code(&self) -> FailureCode {
        self.metadata.code
    }

    pub fn message(&self) -> &str {
        &self.metadata.message
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.metadata.identifier.is_root() {
            write!(f, "{}: ", self.metadata.identifier)?;
        }
        f.write_str(&self.metadata.message)
    }
}

// ---------------------------------------------------------------------------
// Result sink
// ---------------------------------------------------------------------------

/// Destination for failures recorded by rules.
pub trait ResultSink {
    fn add_failure(&mut self, failure: Failure);
}

impl ResultSink for Vec<Failure> {
    fn add_failure(&mut self, failure: Failure) {
        self.push(failure);
    }
}

/// Accumulated validation failures.
///
/// Failures are accumulated (not short-circuited), so every failed rule is
/// reported.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct ValidationResult {
    pub failures: Vec<Failure>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self { failures: vec![] }
    }

    /// True when no failure has been recorded.
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Failures recorded for the given identifier.
    pub fn failures_for(&self, identifier: &Identifier) -> Vec<&Failure> {
        self.failures
            .iter()
            .filter(|f| f.identifier() == identifier)
            .collect()
    }

    /// Merge another result's failures into this one.
    pub fn merge(mut self, other: ValidationResult) -> Self {
        self.failures.extend(other.failures);
        self
    }

    /// `Ok(())` when valid, otherwise the result itself as the error.
    pub fn into_result(self) -> Result<(), ValidationResult> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Serialize the failures to a JSON value.
    ///
    /// Requires the `serialize` feature.
    #[cfg(feature = "serialize")]
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl ResultSink for ValidationResult {
    fn add_failure(&mut self, failure: Failure) {
        self.failures.push(failure);
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", failure)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationResult {}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Returned by rule factories called with invalid arguments.
///
/// These are programmer errors: the call site must be fixed, the rule is
/// never built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("minimum {min} must not be greater than maximum {max}")]
    InvalidRange { min: String, max: String },
    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfDomain {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error("{name} must not be empty")]
    EmptyReference { name: &'static str },
    #[error("condition description must not be blank")]
    BlankDescription,
    #[error("invalid pattern \"{pattern}\": {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid_range(min: impl fmt::Display, max: impl fmt::Display) -> Self {
        let err = ConfigError::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        };
        tracing::debug!(error = %err, "rejected rule configuration");
        err
    }

    pub(crate) fn empty_reference(name: &'static str) -> Self {
        let err = ConfigError::EmptyReference { name };
        tracing::debug!(error = %err, "rejected rule configuration");
        err
    }

    pub(crate) fn blank_description() -> Self {
        tracing::debug!("rejected rule configuration: blank description");
        ConfigError::BlankDescription
    }

    /// Check that `value` lies in `min..=max`.
    pub(crate) fn check_domain(
        name: &'static str,
        value: u32,
        min: u32,
        max: u32,
    ) -> Result<(), Self> {
        if (min..=max).contains(&value) {
            return Ok(());
        }
        let err = ConfigError::OutOfDomain {
            name,
            value: i64::from(value),
            min: i64::from(min),
            max: i64::from(max),
        };
        tracing::debug!(error = %err, "rejected rule configuration");
        Err(err)
    }
}

/// Reject blank condition descriptions.
pub(crate) fn require_description(description: &str) -> Result<String, ConfigError> {
    if description.trim().is_empty() {
        Err(ConfigError::blank_description())
    } else {
        Ok(description.to_string())
    }
}
