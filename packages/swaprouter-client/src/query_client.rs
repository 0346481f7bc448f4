use log::debug;
use swaprouter_chain_client_utils::{
    common::error::ChainClientError, cosmos::wasm_client::WasmClient,
};
use swaprouter_utils::msg::{GetOwnerResponse, GetRouteResponse, QueryMsg};

/// read-only client for a deployed swaprouter contract
pub struct SwaprouterQueryClient<C> {
    client: C,
    contract_address: String,
}

impl<C: WasmClient> SwaprouterQueryClient<C> {
    pub fn new(client: C, contract_address: &str) -> Self {
        Self {
            client,
            contract_address: contract_address.to_string(),
        }
    }

    pub fn contract_address(&self) -> &str {
        &self.contract_address
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// queries the current owner of the contract
    pub async fn get_owner(&self) -> Result<GetOwnerResponse, ChainClientError> {
        self.client
            .query_contract_smart(&self.contract_address, QueryMsg::GetOwner {})
            .await
    }

    /// queries the pool route configured for swapping `input_denom` into `output_denom`
    pub async fn get_route(
        &self,
        input_denom: &str,
        output_denom: &str,
    ) -> Result<GetRouteResponse, ChainClientError> {
        debug!("querying route {input_denom} -> {output_denom}");

        self.client
            .query_contract_smart(
                &self.contract_address,
                QueryMsg::GetRoute {
                    input_denom: input_denom.to_string(),
                    output_denom: output_denom.to_string(),
                },
            )
            .await
    }
}
