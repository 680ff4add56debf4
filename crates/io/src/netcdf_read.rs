//! Low-level NetCDF extraction helpers.

use std::path::Path;

use blendmask_grid::{FILL_VALUE, is_fill};
use chrono::{Months, NaiveDate, TimeDelta};
use netcdf::AttributeValue;

use crate::error::IoError;

/// Open a NetCDF file at `path`, returning [`IoError::FileNotFound`] if the
/// path does not exist on disk.
pub(crate) fn open_file(path: &Path) -> Result<netcdf::File, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(netcdf::open(path)?)
}

/// Read a 1-D `f64` variable, trying each alias in order.
///
/// Returns the data from the first alias that matches. If none match,
/// returns [`IoError::MissingVariable`] with the first alias as the name.
pub(crate) fn read_1d_f64(
    file: &netcdf::File,
    aliases: &[&str],
    path: &Path,
) -> Result<Vec<f64>, IoError> {
    for &alias in aliases {
        if let Some(var) = file.variable(alias) {
            return Ok(var.get_values::<f64, _>(..)?);
        }
    }

    let name = aliases.first().copied().unwrap_or("unknown");
    Err(IoError::MissingVariable {
        name: name.to_string(),
        path: path.to_path_buf(),
    })
}

/// Values and shape of a variable read with its missing values replaced by
/// [`FILL_VALUE`].
#[derive(Debug)]
pub(crate) struct MaskedVariable {
    pub(crate) name: String,
    pub(crate) values: Vec<f64>,
    pub(crate) shape: Vec<usize>,
    pub(crate) units: Option<String>,
}

/// Read the first of `aliases` present in `file`, which must have `rank`
/// dimensions, and map fill values and NaN to [`FILL_VALUE`].
pub(crate) fn read_masked(
    file: &netcdf::File,
    aliases: &[&str],
    rank: usize,
    path: &Path,
) -> Result<MaskedVariable, IoError> {
    let var = aliases
        .iter()
        .find_map(|&alias| file.variable(alias))
        .ok_or_else(|| IoError::MissingVariable {
            name: aliases.join(" or "),
            path: path.to_path_buf(),
        })?;
    let name = var.name();

    let shape: Vec<usize> = var.dimensions().iter().map(|d| d.len()).collect();
    if shape.len() != rank {
        return Err(IoError::DimensionMismatch {
            name: format!("{name} dimensions"),
            expected: rank,
            got: shape.len(),
        });
    }

    let fills: Vec<f64> = ["_FillValue", "missing_value"]
        .into_iter()
        .filter_map(|attr| attribute_f64(&var, attr))
        .collect();
    let mut values = var.get_values::<f64, _>(..)?;
    let n_missing = mask_missing(&mut values, &fills);
    tracing::debug!(variable = %name, ?shape, n_missing, "read variable");

    Ok(MaskedVariable {
        units: attribute_str(&var, "units"),
        name,
        values,
        shape,
    })
}

/// Replace NaN, existing sentinels and any of `fills` with [`FILL_VALUE`].
/// Returns the number of values that are missing afterwards.
pub(crate) fn mask_missing(values: &mut [f64], fills: &[f64]) -> usize {
    let mut n = 0;
    for v in values.iter_mut() {
        if is_fill(*v) || fills.contains(v) {
            *v = FILL_VALUE;
            n += 1;
        }
    }
    n
}

/// Numeric attribute as `f64`, or `None` if absent or non-numeric.
pub(crate) fn attribute_f64(var: &netcdf::Variable<'_>, name: &str) -> Option<f64> {
    match var.attribute_value(name)?.ok()? {
        AttributeValue::Double(v) => Some(v),
        AttributeValue::Float(v) => Some(f64::from(v)),
        AttributeValue::Int(v) => Some(f64::from(v)),
        AttributeValue::Short(v) => Some(f64::from(v)),
        AttributeValue::Doubles(v) => v.first().copied(),
        AttributeValue::Floats(v) => v.first().copied().map(f64::from),
        _ => None,
    }
}

/// String attribute, or `None` if absent or not a string.
pub(crate) fn attribute_str(var: &netcdf::Variable<'_>, name: &str) -> Option<String> {
    match var.attribute_value(name)?.ok()? {
        AttributeValue::Str(s) => Some(s),
        _ => None,
    }
}

/// Read the CF `units` attribute of a time variable.
///
/// Parses strings like `"days since YYYY-MM-DD"` or
/// `"hours since YYYY-MM-DD HH:MM:SS"` and returns the lower-cased unit
/// word together with the base date.
pub(crate) fn read_time_units(
    file: &netcdf::File,
    time_var: &str,
    path: &Path,
) -> Result<(String, NaiveDate), IoError> {
    let var = file
        .variable(time_var)
        .ok_or_else(|| IoError::MissingVariable {
            name: time_var.to_string(),
            path: path.to_path_buf(),
        })?;

    let units_str = attribute_str(&var, "units").ok_or_else(|| IoError::InvalidTime {
        reason: format!("time variable '{time_var}' has no string 'units' attribute"),
    })?;
    parse_time_units(&units_str)
}

/// Split `"<unit> since <date>[ <time>]"` into the unit and base date.
pub(crate) fn parse_time_units(units: &str) -> Result<(String, NaiveDate), IoError> {
    let parts: Vec<&str> = units.split_whitespace().collect();
    if parts.len() < 3 || !parts[1].eq_ignore_ascii_case("since") {
        return Err(IoError::InvalidTime {
            reason: format!("unexpected time units format: '{units}'"),
        });
    }

    // Only the date portion; some files write "1850-1-1" or "1850-01-01T00:00:00".
    let date_str = parts[2].split('T').next().unwrap_or(parts[2]);
    let base_date =
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| IoError::InvalidTime {
            reason: format!("failed to parse base date '{date_str}': {e}"),
        })?;

    Ok((parts[0].to_ascii_lowercase(), base_date))
}

/// Calendar date of the time value `offset` (in `unit`) after `base_date`.
///
/// Day and sub-day offsets use Gregorian arithmetic; for the monthly records
/// this crate reads, calendar differences never move a mid-month stamp
/// across a month boundary. Month and year offsets are truncated to whole
/// months.
pub(crate) fn date_of_offset(
    unit: &str,
    base_date: NaiveDate,
    offset: f64,
) -> Result<NaiveDate, IoError> {
    let invalid = || IoError::InvalidTime {
        reason: format!("cannot add {offset} {unit} to {base_date}"),
    };
    if !offset.is_finite() {
        return Err(invalid());
    }
    let whole = offset.floor() as i64;

    let delta = match unit {
        "days" | "day" | "d" => TimeDelta::try_days(whole),
        "hours" | "hour" | "h" => TimeDelta::try_hours(whole),
        "minutes" | "minute" | "min" => TimeDelta::try_minutes(whole),
        "seconds" | "second" | "s" => TimeDelta::try_seconds(whole),
        "months" | "month" => return add_months(base_date, whole).ok_or_else(invalid),
        "years" | "year" => {
            let months = whole.checked_mul(12).ok_or_else(invalid)?;
            return add_months(base_date, months).ok_or_else(invalid);
        }
        other => {
            return Err(IoError::InvalidTime {
                reason: format!("unsupported time unit '{other}'"),
            });
        }
    };

    delta
        .and_then(|d| base_date.checked_add_signed(d))
        .ok_or_else(invalid)
}

fn add_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let n = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        date.checked_add_months(n)
    } else {
        date.checked_sub_months(n)
    }
}
