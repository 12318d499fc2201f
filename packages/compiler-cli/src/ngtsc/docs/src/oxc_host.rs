// Oxc Docs Host
//
// Answers the class extractor's questions from an oxc parse tree and the
// source text it was parsed from.

use super::entities::*;
use super::function_extractor::FunctionExtractor;
use super::generics_extractor::GenericsExtractor;
use super::host::{DocComment, DocsHost};
use super::jsdoc_extractor::JsDocExtractor;
use super::type_extractor::TypeExtractor;
use crate::ngtsc::reflection::{ClassLikeSyntax, TsDeclaration, TsMember};

pub struct OxcDocsHost<'s> {
    source_text: &'s str,
}

impl<'s> OxcDocsHost<'s> {
    pub fn new(source_text: &'s str) -> Self {
        Self { source_text }
    }
}

impl<'s, 'a> DocsHost<TsDeclaration<'a>> for OxcDocsHost<'s> {
    fn resolve_type(&self, member: &TsMember<'a>) -> String {
        TypeExtractor::resolve_member_type(member, self.source_text)
    }

    fn extract_function(&self, method: &TsMember<'a>) -> FunctionSignature {
        FunctionExtractor::extract(method, self.source_text, self.member_docs(method))
    }

    fn extract_generics(&self, declaration: &TsDeclaration<'a>) -> Vec<GenericEntry> {
        let type_parameters = match declaration.syntax {
            ClassLikeSyntax::Class(class) => class.type_parameters.as_deref(),
            ClassLikeSyntax::Interface(iface) => iface.type_parameters.as_deref(),
        };
        GenericsExtractor::extract_all(type_parameters, self.source_text)
    }

    fn declaration_docs(&self, declaration: &TsDeclaration<'a>) -> DocComment {
        JsDocExtractor::leading_doc_comment(self.source_text, declaration.doc_anchor)
    }

    fn member_docs(&self, member: &TsMember<'a>) -> DocComment {
        JsDocExtractor::leading_doc_comment(self.source_text, member.doc_anchor)
    }
}
