use cosmwasm_std::{Coin, Uint128};
use swaprouter_utils::msg::SwapAmountInRoute;

/// parses a route hop given as `<pool_id>:<token_out_denom>`
pub fn parse_hop(raw: &str) -> Result<SwapAmountInRoute, String> {
    let (pool_id, denom) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected <pool_id>:<token_out_denom>, got {raw}"))?;

    let pool_id = pool_id
        .trim()
        .parse::<u64>()
        .map_err(|e| format!("invalid pool id {pool_id}: {e}"))?;

    let denom = denom.trim();
    if denom.is_empty() {
        return Err(format!("missing token out denom in {raw}"));
    }

    Ok(SwapAmountInRoute::new(pool_id, denom))
}

/// parses a coin given as `<amount><denom>`, e.g. `1000uosmo`
pub fn parse_coin(raw: &str) -> Result<Coin, String> {
    let raw = raw.trim();
    let split = raw
        .find(|c: char| !c.is_ascii_digit())
        .ok_or_else(|| format!("missing denom in {raw}"))?;

    let (amount, denom) = raw.split_at(split);
    if amount.is_empty() {
        return Err(format!("missing amount in {raw}"));
    }

    let amount = amount
        .parse::<u128>()
        .map_err(|e| format!("invalid amount in {raw}: {e}"))?;

    Ok(Coin::new(Uint128::new(amount), denom))
}

/// converts a message coin into funds attached to a transaction
pub fn to_funds(coin: &Coin) -> Result<cosmrs::Coin, String> {
    Ok(cosmrs::Coin {
        denom: coin
            .denom
            .parse()
            .map_err(|e| format!("invalid denom {}: {e}", coin.denom))?,
        amount: coin.amount.u128(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hops() {
        assert_eq!(parse_hop("1:uosmo"), Ok(SwapAmountInRoute::new(1, "uosmo")));
        assert_eq!(
            parse_hop("3:ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2"),
            Ok(SwapAmountInRoute::new(
                3,
                "ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2"
            ))
        );
    }

    #[test]
    fn rejects_malformed_hops() {
        assert!(parse_hop("uosmo").is_err());
        assert!(parse_hop("x:uosmo").is_err());
        assert!(parse_hop("1:").is_err());
    }

    #[test]
    fn parses_coins() {
        assert_eq!(
            parse_coin("1000uosmo"),
            Ok(Coin::new(Uint128::new(1_000), "uosmo"))
        );
        assert!(parse_coin("uosmo").is_err());
        assert!(parse_coin("1000").is_err());
    }

    #[test]
    fn converts_coin_to_funds() {
        let funds = to_funds(&Coin::new(Uint128::new(1_000), "uosmo")).unwrap();

        assert_eq!(funds.amount, 1_000);
        assert_eq!(funds.denom.as_ref(), "uosmo");
    }
}
