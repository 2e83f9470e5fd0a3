use std::collections::HashMap;

/// Value of a single query-string key after folding repeated occurrences
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Absent,
    Single(String),
    List(Vec<String>),
}

static ABSENT: ParamValue = ParamValue::Absent;

impl ParamValue {
    /// First value, for fields that only take one
    pub fn first(&self) -> Option<&str> {
        match self {
            ParamValue::Absent => None,
            ParamValue::Single(value) => Some(value.as_str()),
            ParamValue::List(values) => values.first().map(String::as_str),
        }
    }

    /// All values, a single value normalized to a one-element list
    pub fn values(&self) -> Vec<&str> {
        match self {
            ParamValue::Absent => Vec::new(),
            ParamValue::Single(value) => vec![value.as_str()],
            ParamValue::List(values) => values.iter().map(String::as_str).collect(),
        }
    }

    fn push(&mut self, value: String, as_list: bool) {
        *self = match std::mem::replace(self, ParamValue::Absent) {
            ParamValue::Absent if as_list => ParamValue::List(vec![value]),
            ParamValue::Absent => ParamValue::Single(value),
            ParamValue::Single(first) => ParamValue::List(vec![first, value]),
            ParamValue::List(mut values) => {
                values.push(value);
                ParamValue::List(values)
            }
        };
    }
}

/// Raw search parameters as delivered by the query string
///
/// Repeated keys (`types=a&types=b`) and the bracket form (`types[]=a`)
/// both fold into [`ParamValue::List`]. Empty values are dropped, so
/// `destination=` is the same as leaving `destination` out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: HashMap<String, ParamValue>,
}

impl QueryParams {
    /// Parse an `application/x-www-form-urlencoded` query string
    pub fn parse(query: &str) -> Self {
        Self::from_pairs(url::form_urlencoded::parse(query.as_bytes()).into_owned())
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut values: HashMap<String, ParamValue> = HashMap::new();

        for (key, value) in pairs {
            let key = key.into();
            let value = value.into();
            if value.is_empty() {
                continue;
            }

            let as_list = key.ends_with("[]");
            let key = if as_list {
                key[..key.len() - 2].to_string()
            } else {
                key
            };

            values
                .entry(key)
                .or_insert(ParamValue::Absent)
                .push(value, as_list);
        }

        Self { values }
    }

    pub fn get(&self, key: &str) -> &ParamValue {
        self.values.get(key).unwrap_or(&ABSENT)
    }
}
