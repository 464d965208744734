use std::collections::HashMap;

use crate::protocol::reply::Reply;
use crate::store::PriceStore;

/// Store commands addressable over HTTP
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// /list
    List,
    /// /price?item=
    Price { item: String },
    /// /create?item=&price=
    Create { item: String, price: String },
    /// /delete?item=
    Delete { item: String },
    /// /update?item=&price=
    Update { item: String, price: String },
    /// Known command with unusable parameters
    Invalid(String),
    /// Unknown or unsupported command
    Unknown(String),
}

impl Command {
    /// Parse a command from its name (the request path) and query parameters
    pub fn parse(name: &str, params: &HashMap<String, String>) -> Self {
        let name = name.trim_matches('/');
        let item = || match params.get("item") {
            Some(item) if !item.is_empty() => Ok(item.clone()),
            _ => Err(Command::Invalid(format!(
                "missing item parameter for '{}'",
                name
            ))),
        };
        // Missing price is left empty so the store rejects it as invalid
        let price = || params.get("price").cloned().unwrap_or_default();

        let parsed = match name {
            "list" => Ok(Command::List),
            "price" => item().map(|item| Command::Price { item }),
            "create" => item().map(|item| Command::Create {
                item,
                price: price(),
            }),
            "delete" => item().map(|item| Command::Delete { item }),
            "update" => item().map(|item| Command::Update {
                item,
                price: price(),
            }),
            _ => Ok(Command::Unknown(name.to_string())),
        };

        parsed.unwrap_or_else(|invalid| invalid)
    }

    /// Execute the command on the given store and return the reply
    pub fn execute(&self, store: &PriceStore) -> Reply {
        match self {
            Command::List => Reply::Listing(store.list()),
            Command::Price { item } => store.price(item).into(),
            Command::Create { item, price } => store.create(item, price).into(),
            Command::Delete { item } => store.delete(item).into(),
            Command::Update { item, price } => store.update(item, price).into(),
            Command::Invalid(msg) => Reply::BadRequest(msg.clone()),
            Command::Unknown(name) => Reply::NoRoute(name.clone()),
        }
    }
}
