use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{DiscoveryRow, EntityId, MaterialLine, Signatory};

/// Default heading for the materials page ("floor heating materials list").
pub const DEFAULT_PAGE1_TITLE: &str = "YERDEN ISITMA MALZEME LİSTESİ";

/// Default heading for the survey page ("floor heating discovery summary").
pub const DEFAULT_PAGE2_TITLE: &str = "YERDEN ISITMA KEŞİF ÖZETİ";

/// The standard terms-and-conditions notes every proposal starts with.
pub const STANDARD_NOTES: [&str; 5] = [
    "Fiyatlarımız EUR para birimi üzerindendir.",
    "Fiyatlarımıza KDV dahil değildir.",
    "Ödeme tarihindeki T.C.M.B. efektif satış kuru esas alınacaktır.",
    "Teslimat: Stoktan hemen teslim / Antalya Depo.",
    "Bu teklif 7 gün süreyle geçerlidir.",
];

/// Root aggregate for one proposal editing session: header metadata, the
/// four editable lists, and the optional manual grand total.
///
/// All lists preserve insertion order. Materials, discovery rows and
/// signatories are addressed by [`EntityId`]; notes are addressed by
/// position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalDocument {
    pub date: NaiveDate,
    pub project_name: String,
    pub attention_to: String,
    pub subject: String,
    /// Currency code shown next to every amount (e.g. "EUR").
    pub currency: String,
    pub page1_title: String,
    pub page2_title: String,
    /// Product/brand label printed next to the logo; empty when unused.
    pub product_title: String,
    /// Manual override for the grand total. Replaces the computed sum only
    /// when set and strictly positive; zero and unset both mean "no
    /// override".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_total: Option<Decimal>,
    pub notes: Vec<String>,
    /// Monotonic id counter. Serialized with the document so a reloaded
    /// session never re-issues an id. Kept ahead of the entity lists so the
    /// TOML form emits it before the array-of-tables sections.
    next_entity_id: u64,
    pub materials: Vec<MaterialLine>,
    pub discovery: Vec<DiscoveryRow>,
    pub signatories: Vec<Signatory>,
}

impl ProposalDocument {
    /// An empty proposal dated `date`, carrying the default page titles and
    /// an EUR currency code.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            project_name: String::new(),
            attention_to: String::new(),
            subject: String::new(),
            currency: "EUR".to_string(),
            page1_title: DEFAULT_PAGE1_TITLE.to_string(),
            page2_title: DEFAULT_PAGE2_TITLE.to_string(),
            product_title: String::new(),
            manual_total: None,
            notes: Vec::new(),
            next_entity_id: 1,
            materials: Vec::new(),
            discovery: Vec::new(),
            signatories: Vec::new(),
        }
    }

    /// Like [`ProposalDocument::new`], seeded with [`STANDARD_NOTES`].
    pub fn with_standard_notes(date: NaiveDate) -> Self {
        let mut doc = Self::new(date);
        doc.notes = STANDARD_NOTES.iter().map(|note| note.to_string()).collect();
        doc
    }

    /// Issues the next unused [`EntityId`].
    pub(crate) fn fresh_id(&mut self) -> EntityId {
        let id = EntityId::new(self.next_entity_id);
        self.next_entity_id += 1;
        id
    }
}
