use multiversx_sc::proxy_imports::*;

pub struct Erc20RegistryProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for Erc20RegistryProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = Erc20RegistryProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        Erc20RegistryProxyMethods { wrapped_tx: tx }
    }
}

pub struct Erc20RegistryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> Erc20RegistryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn token_is_valid_erc20<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        token: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalBool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("tokenIsValidERC20")
            .argument(&token)
            .original_result()
    }
}

#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, Copy, PartialEq, Eq,
    Debug,
)]
pub enum OptionalBool {
    Unset,
    False,
    True,
}
