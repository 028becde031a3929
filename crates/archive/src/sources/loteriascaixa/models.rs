use serde::{Deserialize, Serialize};

/// One contest as served by the loteriascaixa API.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiDraw {
    #[serde(rename = "concurso")]
    pub contest: u32,
    /// `DD/MM/YYYY`
    #[serde(rename = "data")]
    pub date: String,
    /// Two digit strings, e.g. `"03"`.
    #[serde(rename = "dezenas")]
    pub numbers: Vec<String>,
    #[serde(rename = "premiacoes", default)]
    pub prizes: Vec<ApiPrize>,
    #[serde(rename = "local", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiPrize {
    #[serde(rename = "faixa", default)]
    pub tier: Option<u32>,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "ganhadores", default)]
    pub winners: Option<u64>,
    #[serde(rename = "valorPremio", default)]
    pub amount: Option<ApiAmount>,
}

/// Payouts come back either as JSON numbers or as text.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ApiAmount {
    Number(f64),
    Text(String),
}

/// The latest-draw endpoint answers with a single record or a list, newest first.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(untagged)]
pub enum LatestResponse {
    Many(Vec<ApiDraw>),
    One(Box<ApiDraw>),
}

impl LatestResponse {
    pub fn into_latest(self) -> Option<ApiDraw> {
        match self {
            Self::Many(draws) => draws.into_iter().next(),
            Self::One(draw) => Some(*draw),
        }
    }
}
