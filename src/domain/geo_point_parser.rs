use crate::domain::coordinate::CoordinateError;
use crate::domain::{FieldOrder, GeoPoint};
use tracing::{debug, instrument, trace};

type Setter = fn(&mut GeoPoint, &str) -> Result<(), CoordinateError>;

// Tried in order, the first fragment contained in a label wins.
const LABELS: [(&str, Setter); 3] = [
    ("lat", |point, value| point.try_set_latitude(value)),
    ("lon", |point, value| point.try_set_longitude(value)),
    ("alt", |point, value| point.try_set_altitude(value)),
];

impl GeoPoint {
    /// Updates the point from free text, either labeled or positional.
    ///
    /// Whitespace is ignored everywhere and is never a delimiter. Text containing a `:` is read as labeled
    /// segments such as `Lat: 76.45, LONGITUDE: -110.123, AltitudE: 0.0`, where any label containing `lat`, `lon`
    /// or `alt` selects the field. Other text is read as two or three comma separated values in the given `order`.
    ///
    /// Every value that parses and is valid is applied, everything else is skipped and the field keeps its value.
    #[instrument(skip(self))]
    pub fn parse(&mut self, text: &str, order: FieldOrder) {
        let data: String = text.to_lowercase().chars().filter(|c| !c.is_whitespace()).collect();
        if data.is_empty() {
            return;
        }

        let segments: Vec<&str> = data.split(',').collect();
        if data.contains(':') {
            self.parse_labeled(&segments);
        } else {
            self.parse_positional(&segments, order);
        }
    }

    /// Parses `text` into a point that starts at the origin.
    pub fn parsed(text: &str, order: FieldOrder) -> Self {
        let mut point = GeoPoint::default();
        point.parse(text, order);
        point
    }

    fn parse_labeled(&mut self, segments: &[&str]) {
        for segment in segments {
            let parts: Vec<&str> = segment.split(':').collect();
            let [label, value] = parts[..] else {
                debug!("Skipping segment '{}', expected a single label and value", segment);
                continue;
            };

            let Some((_, setter)) = LABELS.iter().find(|(fragment, _)| label.contains(fragment)) else {
                debug!("Skipping segment '{}', unknown label '{}'", segment, label);
                continue;
            };

            self.apply(*setter, value);
        }
    }

    fn parse_positional(&mut self, segments: &[&str], order: FieldOrder) {
        let (first, second): (Setter, Setter) = match order {
            FieldOrder::LatFirst => (LABELS[0].1, LABELS[1].1),
            FieldOrder::LonFirst => (LABELS[1].1, LABELS[0].1),
        };

        match segments {
            [a, b] => {
                self.apply(first, a);
                self.apply(second, b);
            }
            [a, b, altitude] => {
                self.apply(first, a);
                self.apply(second, b);
                self.apply(LABELS[2].1, altitude);
            }
            _ => debug!("Skipping positional text with {} segment(s), expected 2 or 3", segments.len()),
        }
    }

    fn apply(&mut self, setter: Setter, value: &str) {
        setter(self, value).unwrap_or_else(|e| trace!("Ignoring value: {}", e));
    }
}
