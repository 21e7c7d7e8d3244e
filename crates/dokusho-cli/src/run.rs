use anyhow::{Result, anyhow};
use dokusho::Dokusho;
use dokusho_lib::extensions::Extension;

pub fn run(source: &Dokusho, query: Option<String>) -> Result<()> {
    let info = source.get_source_info();
    println!("{} ({}) {:?}", info.name, info.id, info.languages);

    for pref in source.get_preferences()? {
        println!("{}: {}", pref.title, pref.summary);
    }

    let page = match query {
        Some(query) => source.search_manga(1, Some(query), None)?,
        None => source.get_popular_manga(1)?,
    };
    println!(
        "{} manga, has next page: {}",
        page.manga.len(),
        page.has_next_page
    );
    for manga in &page.manga {
        println!("  {} [{}]", manga.title, manga.path);
    }

    let first = page
        .manga
        .first()
        .ok_or_else(|| anyhow!("server returned no manga"))?;
    let manga = source.get_manga_detail(first.path.clone())?;
    println!("{:#?}", manga);
    println!("{}", source.get_manga_url(&manga.path));

    let chapters = source.get_chapters(manga.path.clone())?;
    println!("{} chapters", chapters.len());
    for chapter in chapters.iter().take(10) {
        println!(
            "  {} [{}] {}",
            chapter.title,
            chapter.scanlator.as_deref().unwrap_or("-"),
            chapter.uploaded
        );
    }

    let Some(chapter) = chapters.first() else {
        return Ok(());
    };
    let pages = source.get_pages(chapter.path.clone())?;
    println!("{} pages", pages.len());
    for page in &pages {
        println!("  {} {}", page.index, page.image_url);
    }

    if let Some(page) = pages.first() {
        let bytes = source.get_image_bytes(page.image_url.clone())?;
        println!("first page is {} bytes", bytes.len());
    }

    Ok(())
}
