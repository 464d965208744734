use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::encoding::Price;
use crate::error::StoreError;
use crate::store::Listing;

/// Outcome of a command, ready to be rendered as plain text
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
  /// Price of a single item
  Price(Price),
  /// Every item with its price
  Listing(Listing),
  /// Store operation failed
  Error(StoreError),
  /// Request parameters were unusable
  BadRequest(String),
  /// No command by that name
  NoRoute(String),
}

impl Reply {
  /// HTTP status for this reply
  pub fn status(&self) -> StatusCode {
    match self {
      Reply::Price(_) | Reply::Listing(_) => StatusCode::OK,
      Reply::Error(StoreError::ItemNotFound(_)) => StatusCode::NOT_FOUND,
      Reply::Error(StoreError::InvalidPrice(_)) => StatusCode::BAD_REQUEST,
      Reply::BadRequest(_) => StatusCode::BAD_REQUEST,
      Reply::NoRoute(_) => StatusCode::NOT_FOUND,
    }
  }

  /// Encode the reply body
  pub fn encode(&self) -> String {
    match self {
      Reply::Price(price) => format!("{}\n", price),
      Reply::Listing(listing) => listing.to_string(),
      Reply::Error(e) => format!("{}\n", e),
      Reply::BadRequest(msg) => format!("{}\n", msg),
      Reply::NoRoute(name) => format!("no such page: /{}\n", name),
    }
  }
}

impl From<Result<Price, StoreError>> for Reply {
  fn from(result: Result<Price, StoreError>) -> Self {
    result.map_or_else(Reply::Error, Reply::Price)
  }
}

impl From<Result<Listing, StoreError>> for Reply {
  fn from(result: Result<Listing, StoreError>) -> Self {
    result.map_or_else(Reply::Error, Reply::Listing)
  }
}

impl IntoResponse for Reply {
  fn into_response(self) -> Response {
    (
      self.status(),
      [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
      self.encode(),
    )
      .into_response()
  }
}
