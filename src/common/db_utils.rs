use crate::common::error::AppError;
use crate::config::AppState;

/// Tamanho fixo de página das listagens.
pub(crate) const PER_PAGE: i64 = 10;

// ---
// Gateway de Conexão: uma conexão por requisição
// ---
/// Adquire uma conexão da pool para a requisição atual.
///
/// A pool é criada com `connect_lazy`, então é aqui que uma falha de
/// conectividade aparece. O chamador converte o erro em um aviso para o
/// usuário e renderiza um payload vazio; a devolução da conexão é RAII
/// (drop do `PoolConnection` no fim do handler, em qualquer caminho de saída).
pub(crate) async fn get_connection(
    app_state: &AppState,
) -> Result<sqlx::pool::PoolConnection<sqlx::MySql>, AppError> {
    // O operador '?' converte automaticamente sqlx::Error -> AppError::DatabaseError
    let conn = app_state.db_pool.acquire().await?;
    Ok(conn)
}

// ---
// Aritmética de paginação
// ---

/// Normaliza o parâmetro `page` vindo da query string. Páginas são 1-based;
/// ausente, não numérico, zero ou negativo viram página 1 em vez de OFFSET
/// inválido ou resposta 400.
pub(crate) fn clamp_page(raw: Option<&str>) -> i64 {
    raw.and_then(|page| page.parse::<i64>().ok()).unwrap_or(1).max(1)
}

pub(crate) fn offset(page: i64) -> i64 {
    (page - 1) * PER_PAGE
}

/// total_pages = ceil(total / PER_PAGE). Tabela vazia tem 0 páginas.
pub(crate) fn total_pages(total: i64) -> i64 {
    (total + PER_PAGE - 1) / PER_PAGE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_page_defaults_to_first() {
        assert_eq!(clamp_page(None), 1);
        assert_eq!(clamp_page(Some("0")), 1);
        assert_eq!(clamp_page(Some("-7")), 1);
        assert_eq!(clamp_page(Some("3")), 3);
    }

    #[test]
    fn clamp_page_coerces_non_numeric_to_first() {
        assert_eq!(clamp_page(Some("abc")), 1);
        assert_eq!(clamp_page(Some("")), 1);
        assert_eq!(clamp_page(Some("2x")), 1);
    }

    #[test]
    fn offset_is_zero_based_from_page_one() {
        assert_eq!(offset(1), 0);
        assert_eq!(offset(2), 10);
        assert_eq!(offset(5), 40);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(10), 1);
        assert_eq!(total_pages(11), 2);
        assert_eq!(total_pages(95), 10);
    }

    // Propriedade: com N linhas e páginas de 10, a página `p` devolve
    // min(10, max(0, N - (p-1)*10)) linhas.
    #[test]
    fn rows_visible_on_each_page() {
        fn rows_on_page(n: i64, page: i64) -> i64 {
            (n - offset(page)).clamp(0, PER_PAGE)
        }
        assert_eq!(rows_on_page(23, 1), 10);
        assert_eq!(rows_on_page(23, 2), 10);
        assert_eq!(rows_on_page(23, 3), 3);
        assert_eq!(rows_on_page(23, 4), 0);
        assert_eq!(rows_on_page(0, 1), 0);
    }
}
