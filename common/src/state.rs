//! ビューア状態（PO一覧・選択・解析）の管理
//!
//! ブラウザとCLIはこの型だけを経由して状態を変更する。
//! 解析リクエストは発行時の世代番号（generation）を持ち、
//! 選択が変わった後に届いた古いレスポンスは破棄される。

use crate::error::Result;
use crate::types::{ExtractedData, PoRef};

/// メインビューのタブ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MainTab {
    Document,
    #[default]
    Details,
    Invoice,
}

impl MainTab {
    pub const ALL: [MainTab; 3] = [MainTab::Document, MainTab::Details, MainTab::Invoice];

    pub fn label(&self) -> &'static str {
        match self {
            MainTab::Document => "Document",
            MainTab::Details => "Details",
            MainTab::Invoice => "Convert to Invoice",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MainTab::Document => "document",
            MainTab::Details => "details",
            MainTab::Invoice => "invoice",
        }
    }
}

/// 画面全体のフェーズ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Listing,
    Extracting,
    Extracted,
    ExtractionFailed,
}

/// 発行済み解析リクエストの識別子
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionTicket {
    pub generation: u64,
    pub filename: String,
}

/// 解析結果を適用した結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionOutcome {
    Applied,
    Failed,
    /// 選択が変わった後に届いたレスポンス（破棄）
    Stale,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewerState {
    pos: Vec<PoRef>,
    listing: bool,
    selected: Option<PoRef>,
    extracted: Option<ExtractedData>,
    extracting: bool,
    generation: u64,
    active_tab: MainTab,
}

impl ViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pos(&self) -> &[PoRef] {
        &self.pos
    }

    pub fn selected(&self) -> Option<&PoRef> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_ref().is_some_and(|po| po.id == id)
    }

    pub fn find(&self, key: &str) -> Option<&PoRef> {
        self.pos
            .iter()
            .find(|po| po.id == key)
            .or_else(|| self.pos.iter().find(|po| po.filename == key))
    }

    pub fn is_listing(&self) -> bool {
        self.listing
    }

    pub fn is_extracting(&self) -> bool {
        self.extracting
    }

    pub fn extracted(&self) -> Option<&ExtractedData> {
        self.extracted.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn active_tab(&self) -> MainTab {
        self.active_tab
    }

    pub fn set_active_tab(&mut self, tab: MainTab) {
        self.active_tab = tab;
    }

    pub fn phase(&self) -> Phase {
        if self.selected.is_none() {
            return if self.listing { Phase::Listing } else { Phase::Idle };
        }
        if self.extracting {
            Phase::Extracting
        } else if self.extracted.is_some() {
            Phase::Extracted
        } else {
            Phase::ExtractionFailed
        }
    }

    pub fn begin_listing(&mut self) {
        self.listing = true;
    }

    /// 一覧取得の完了。失敗時は一覧をそのまま残す。
    pub fn finish_listing(&mut self, result: Result<Vec<PoRef>>) -> bool {
        self.listing = false;
        match result {
            Ok(pos) => {
                self.pos = pos;
                true
            }
            Err(_) => false,
        }
    }

    /// POを選択し、以前の解析結果を破棄して直ちに解析を開始する
    pub fn select(&mut self, po: PoRef) -> ExtractionTicket {
        self.selected = Some(po);
        self.extracted = None;
        self.start_extraction()
    }

    pub fn select_by_id(&mut self, id: &str) -> Option<ExtractionTicket> {
        let po = self.find(id)?.clone();
        Some(self.select(po))
    }

    /// 「Refresh Data」。解析中または未選択なら何もしない。
    /// 既存の結果はレスポンスが届くまで表示したままにする。
    pub fn refresh(&mut self) -> Option<ExtractionTicket> {
        if self.selected.is_none() || self.is_extracting() {
            return None;
        }
        Some(self.start_extraction())
    }

    /// 解析レスポンスを適用する
    pub fn complete_extraction(
        &mut self,
        ticket: &ExtractionTicket,
        result: Result<ExtractedData>,
    ) -> ExtractionOutcome {
        if ticket.generation != self.generation || !self.is_extracting() {
            return ExtractionOutcome::Stale;
        }
        self.extracting = false;
        match result {
            Ok(data) => {
                self.extracted = Some(data);
                ExtractionOutcome::Applied
            }
            Err(_) => ExtractionOutcome::Failed,
        }
    }

    pub fn close(&mut self) {
        self.selected = None;
        self.extracted = None;
        self.extracting = false;
        self.generation += 1;
    }

    fn start_extraction(&mut self) -> ExtractionTicket {
        self.generation += 1;
        self.extracting = true;
        let filename = self
            .selected
            .as_ref()
            .map(|po| po.filename.clone())
            .unwrap_or_default();
        ExtractionTicket {
            generation: self.generation,
            filename,
        }
    }
}
