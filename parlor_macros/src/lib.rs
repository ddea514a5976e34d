use proc_macro::TokenStream as TokenStream1;
use quote::ToTokens;
use syn::{self, parse_quote};

/// This macro is added before a method of the `Table` struct in the impl block.
/// Use this macro to first check if current game phase is exactly the phase in
/// the attribute.
///
/// For example, `#[allowed_phase(PlayerTurn)]` will make a method first check
/// if current game phase is `PlayerTurn`. If not, the method returns
/// `GameError::WrongPhase` without touching the table.
///
/// The expanded code refers to `GamePhase` and `GameError` unqualified, so both
/// must be in scope where the attribute is used.
#[proc_macro_attribute]
pub fn allowed_phase(attr: TokenStream1, item: TokenStream1) -> TokenStream1 {
    let mut ast: syn::ImplItemFn = match syn::parse(item) {
        Ok(ast) => ast,
        Err(err) => return err.to_compile_error().into(),
    };
    let phase: syn::Ident = match syn::parse(attr) {
        Ok(phase) => phase,
        Err(err) => return err.to_compile_error().into(),
    };
    let operation = ast.sig.ident.to_string();

    let early_return: syn::Stmt = parse_quote! {
        if self.current_game_phase != GamePhase::#phase {
            return Err(GameError::WrongPhase {
                operation: #operation,
                expected: GamePhase::#phase,
                actual: self.current_game_phase,
            });
        }
    };
    ast.block.stmts.insert(0, early_return);
    ast.into_token_stream().into()
}
