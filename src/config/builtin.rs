use crate::config::mapping_config::TableInfo;
use crate::domain::model::PhraseMapping;

pub const BUILTIN_TABLE_NAME: &str = "admin-pt-br";
pub const BUILTIN_LOCALE: &str = "pt-BR";

/// English → Portuguese strings of the portfolio admin page, in application
/// order.
pub const ADMIN_PT_BR: &[(&str, &str)] = &[
    // login
    ("Admin Login", "Painel Administrativo"),
    (
        "Enter your credentials to manage the portfolio",
        "Gerencie seu portfólio de fotografia e design",
    ),
    ("Email", "E-mail"),
    ("Password", "Senha"),
    ("Login", "Entrar"),
    ("Logging in...", "Entrando..."),
    ("Login Failed", "Falha no Login"),
    ("Success", "Sucesso"),
    ("Welcome to the admin panel!", "Bem-vindo ao painel administrativo!"),
    ("Logged Out", "Desconectado"),
    (
        "You have been logged out successfully.",
        "Você foi desconectado com sucesso.",
    ),
    ("Logout", "Sair"),
    // header
    ("Admin Panel", "Painel Administrativo"),
    // tabs
    ("Photography", "Fotografia"),
    ("Design", "Design"),
    ("Hero", "Hero"),
    ("Content", "Conteúdo"),
    // photography
    ("Photography Management", "Gerenciamento de Fotografias"),
    ("Batch Upload", "Upload em Lote"),
    ("Add New Photo", "Adicionar Nova Foto"),
    ("Upload New Photo", "Fazer Upload de Foto"),
    ("Edit Photo", "Editar Foto"),
    ("Image File", "Arquivo de Imagem"),
    ("Category", "Categoria"),
    ("Title", "Título"),
    ("Description", "Descrição"),
    ("Year", "Ano"),
    ("Event Name (optional)", "Nome do Evento (opcional)"),
    ("Event Date (optional)", "Data do Evento (opcional)"),
    ("Tags (optional)", "Tags (opcional)"),
    ("Upload Photo", "Fazer Upload"),
    ("Uploading...", "Enviando..."),
    ("Update Photo", "Atualizar Foto"),
    ("Updating...", "Atualizando..."),
    ("Cancel", "Cancelar"),
    ("Edit", "Editar"),
    ("Delete", "Deletar"),
    ("Photo uploaded successfully!", "Foto enviada com sucesso!"),
    ("Photo updated successfully!", "Foto atualizada com sucesso!"),
    ("Photo Deleted", "Foto Deletada"),
    (
        "The photo has been removed successfully.",
        "A foto foi removida com sucesso.",
    ),
    ("Delete Failed", "Falha ao Deletar"),
    ("Error", "Erro"),
    ("Loading...", "Carregando..."),
    (
        "No photos yet. Add your first one above!",
        "Nenhuma foto ainda. Adicione a primeira acima!",
    ),
    // design projects
    ("Design Projects Management", "Gerenciamento de Projetos"),
    ("Add New Project", "Adicionar Novo Projeto"),
    ("Upload New Design Project", "Fazer Upload de Projeto"),
    ("Images (multiple allowed)", "Imagens (múltiplas permitidas)"),
    ("Client (optional)", "Cliente (opcional)"),
    ("Upload Project", "Fazer Upload"),
    ("Design project uploaded successfully!", "Projeto enviado com sucesso!"),
    ("Project Deleted", "Projeto Deletado"),
    (
        "The project has been removed successfully.",
        "O projeto foi removido com sucesso.",
    ),
    (
        "No projects yet. Add your first one above!",
        "Nenhum projeto ainda. Adicione o primeiro acima!",
    ),
    // hero images
    ("Hero Images Management", "Gerenciamento de Imagens Hero"),
    ("Add New Hero Image", "Adicionar Nova Imagem Hero"),
    ("Upload New Hero Image", "Fazer Upload de Imagem Hero"),
    ("Title (for reference)", "Título (para referência)"),
    ("Upload Image", "Fazer Upload"),
    ("Set Active", "Ativar"),
    ("Deactivate", "Desativar"),
    ("Hero image uploaded successfully!", "Imagem hero enviada com sucesso!"),
    ("Image Deleted", "Imagem Deletada"),
    (
        "The hero image has been removed successfully.",
        "A imagem hero foi removida com sucesso.",
    ),
    (
        "No hero images yet. Add your first one above!",
        "Nenhuma imagem hero ainda. Adicione a primeira acima!",
    ),
    ("ACTIVE", "ATIVA"),
    // site content
    ("Site Content Management", "Gerenciamento de Conteúdo do Site"),
    ("Search content...", "Buscar conteúdo..."),
    ("Loading content...", "Carregando conteúdo..."),
    ("items", "itens"),
    ("Save", "Salvar"),
    ("Content updated successfully!", "Conteúdo atualizado com sucesso!"),
];

impl PhraseMapping {
    pub fn builtin() -> Self {
        Self::from_static(ADMIN_PT_BR)
    }
}

/// `[table]` header describing [`ADMIN_PT_BR`].
pub fn builtin_table_info() -> TableInfo {
    TableInfo {
        name: BUILTIN_TABLE_NAME.to_string(),
        description: Some("Portfolio admin page strings".to_string()),
        locale: Some(BUILTIN_LOCALE.to_string()),
    }
}
