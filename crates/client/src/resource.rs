use serde::de::DeserializeOwned;
use shared_types::{
    CommercialJob, FinishedProduct, Order, ProductType, Production, RawMaterial, RawMaterialType,
    Rental,
};

/// A record type served under `/<PATH>` with list/create/update/delete.
pub trait ApiResource: DeserializeOwned {
    const PATH: &'static str;
}

macro_rules! api_resource {
    ($($ty:ty => $path:literal),* $(,)?) => {
        $(impl ApiResource for $ty {
            const PATH: &'static str = $path;
        })*
    };
}

api_resource! {
    Order => "/orders",
    Rental => "/rentals",
    Production => "/productions",
    RawMaterial => "/raw-materials",
    FinishedProduct => "/finished-products",
    CommercialJob => "/commercial-jobs",
    ProductType => "/product-types",
    RawMaterialType => "/raw-material-types",
}
