use blendmask_calendar::{BaselinePeriod, MONTHS_PER_YEAR, TimeAxis, YearWindow};

#[test]
fn climatology_covers_thirty_full_years() {
    let axis = TimeAxis::new(1850, 170 * MONTHS_PER_YEAR);
    let idx = axis.indices_within(BaselinePeriod::CLIMATOLOGY_1961_1990);

    assert_eq!(idx.len(), 360);
    assert_eq!(idx[0], (1961 - 1850) * 12);
    assert_eq!(*idx.last().unwrap(), (1991 - 1850) * 12 - 1);

    // Every calendar month appears exactly thirty times.
    for phase in 0..MONTHS_PER_YEAR {
        let count = idx.iter().filter(|&&i| axis.phase(i) == phase).count();
        assert_eq!(count, 30, "phase {phase}");
    }
}

#[test]
fn climatology_outside_record_is_empty() {
    let axis = TimeAxis::new(1850, 50 * MONTHS_PER_YEAR);
    assert!(
        axis.indices_within(BaselinePeriod::CLIMATOLOGY_1961_1990)
            .is_empty()
    );
}

#[test]
fn warming_windows_for_1850_start() {
    let axis = TimeAxis::new(1850, 170 * MONTHS_PER_YEAR);
    assert_eq!(axis.year_range(YearWindow::PRE_INDUSTRIAL), 0..51 * 12);
    assert_eq!(
        axis.year_range(YearWindow::RECENT_DECADE),
        160 * 12..170 * 12
    );
}

#[test]
fn incomplete_final_decade_is_clipped() {
    // Record ends in June 2014.
    let axis = TimeAxis::new(1850, 164 * MONTHS_PER_YEAR + 6);
    let recent = axis.year_range(YearWindow::RECENT_DECADE);
    assert_eq!(recent.start, 160 * 12);
    assert_eq!(recent.end, axis.len());
    assert_eq!(recent.len(), 4 * 12 + 6);
}

#[test]
fn later_start_year_shifts_windows() {
    let axis = TimeAxis::new(1861, 30 * MONTHS_PER_YEAR);
    let pre = axis.year_range(YearWindow::PRE_INDUSTRIAL);
    assert_eq!(pre, 0..30 * 12);
}
