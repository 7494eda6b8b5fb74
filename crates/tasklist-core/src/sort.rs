use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::config::UndatedPlacement;
use crate::task::{
  Task,
  TaskRecord
};

/// Active-list ordering: higher priority
/// tier first, then earlier date.
pub fn compare_active(
  a: &TaskRecord,
  b: &TaskRecord,
  undated: UndatedPlacement
) -> Ordering {
  b.priority
    .tier()
    .cmp(&a.priority.tier())
    .then_with(|| {
      compare_dates(
        a.parsed_date(),
        b.parsed_date(),
        undated
      )
    })
}

fn compare_dates(
  a: Option<NaiveDate>,
  b: Option<NaiveDate>,
  undated: UndatedPlacement
) -> Ordering {
  match (a, b) {
    | (Some(a), Some(b)) => a.cmp(&b),
    | (None, None) => Ordering::Equal,
    | (None, Some(_)) => {
      match undated {
        | UndatedPlacement::First => {
          Ordering::Less
        }
        | UndatedPlacement::Last => {
          Ordering::Greater
        }
      }
    }
    | (Some(_), None) => {
      compare_dates(b, a, undated)
        .reverse()
    }
  }
}

/// Stable in-place sort of the active
/// list.
pub fn sort_active(
  tasks: &mut [Task],
  undated: UndatedPlacement
) {
  tasks.sort_by(|a, b| {
    compare_active(
      &a.record, &b.record, undated
    )
  });
}

pub fn is_sorted_active(
  tasks: &[Task],
  undated: UndatedPlacement
) -> bool {
  tasks.windows(2).all(|pair| {
    compare_active(
      &pair[0].record,
      &pair[1].record,
      undated
    ) != Ordering::Greater
  })
}
