// region:    --- Imports
use crate::listing::AuctionItem;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// endregion: --- Imports

// region:    --- Sort Types
/// 정렬 기준
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    EndDate,
    CurrentPrice,
    Msrp,
}

/// 정렬 방향
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// 호출자가 보관하는 정렬 토글 상태
/// 같은 기준을 다시 선택하면 방향이 바뀌고, 처음 선택한 기준은 오름차순으로 시작한다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    current: Option<(SortKey, SortDirection)>,
}

impl SortState {
    pub fn select(&mut self, key: SortKey) -> SortDirection {
        let direction = match self.current {
            Some((current_key, direction)) if current_key == key => direction.toggled(),
            _ => SortDirection::Asc,
        };
        self.current = Some((key, direction));
        direction
    }

    pub fn current(&self) -> Option<(SortKey, SortDirection)> {
        self.current
    }
}
// endregion: --- Sort Types

// region:    --- Sort
fn compare_by_key(a: &AuctionItem, b: &AuctionItem, key: SortKey) -> Ordering {
    match key {
        // 날짜가 없는 상품(종료 취급)은 가장 앞에 온다
        SortKey::EndDate => a.end_date.cmp(&b.end_date),
        SortKey::CurrentPrice => a.current_price.total_cmp(&b.current_price),
        SortKey::Msrp => a.msrp.total_cmp(&b.msrp),
    }
}

/// 안정 정렬 (같은 값은 입력 순서 유지)
pub fn sort(items: &[AuctionItem], key: SortKey, direction: SortDirection) -> Vec<AuctionItem> {
    let mut sorted = items.to_vec();
    match direction {
        SortDirection::Asc => sorted.sort_by(|a, b| compare_by_key(a, b, key)),
        SortDirection::Desc => sorted.sort_by(|a, b| compare_by_key(b, a, key)),
    }
    sorted
}
// endregion: --- Sort
