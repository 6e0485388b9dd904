//! The numbered main menu and one handler per action.
//!
//! Handlers only gather answers and print results; every rule lives behind
//! [`ShopApi`]. A failing action reports its error and returns to the menu.
//! Running out of input ends the session.

use super::input::{InputSource, Prompter};
use super::render::{render_flowers, render_menu, render_messages, render_orders};
use chrono::NaiveDate;
use florist::api::{
    CmdResult, DeleteCheck, FlowerPatch, FlowerQuery, LineRequest, OrderDraft, ShopApi,
    SortDirection, SortField,
};
use florist::error::{Result, ShopError};
use florist::model::{Flower, DATE_FORMAT};
use florist::store::DataStore;
use florist::validate;
use std::io::Write;

enum Flow {
    Continue,
    Quit,
}

pub fn run_menu<S, I, W>(api: &mut ShopApi<S>, prompt: &mut Prompter<I, W>) -> Result<()>
where
    S: DataStore,
    I: InputSource,
    W: Write,
{
    loop {
        prompt.say(&render_menu())?;
        let choice = prompt.choose("Your choice: ", 1, 10)?;
        match dispatch(api, prompt, choice) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => return Ok(()),
            Err(ShopError::InputClosed) => return Err(ShopError::InputClosed),
            Err(e) => {
                tracing::warn!("action {} failed: {}", choice, e);
                prompt.say(&format!("Error: {}", e))?;
            }
        }
    }
}

fn dispatch<S, I, W>(api: &mut ShopApi<S>, prompt: &mut Prompter<I, W>, choice: usize) -> Result<Flow>
where
    S: DataStore,
    I: InputSource,
    W: Write,
{
    match choice {
        1 => add_flowers(api, prompt)?,
        2 => find_flower(api, prompt)?,
        3 => update_flower(api, prompt)?,
        4 => delete_flower(api, prompt)?,
        5 => add_orders(api, prompt)?,
        6 => display_orders(api, prompt)?,
        7 => sort_orders(api, prompt)?,
        8 => show(prompt, api.save()?)?,
        9 => show(prompt, api.load()?)?,
        _ => return quit(api, prompt),
    }
    Ok(Flow::Continue)
}

fn show<I: InputSource, W: Write>(prompt: &mut Prompter<I, W>, result: CmdResult) -> Result<()> {
    prompt.say(&render_messages(&result.messages))
}

fn add_flowers<S, I, W>(api: &mut ShopApi<S>, prompt: &mut Prompter<I, W>) -> Result<()>
where
    S: DataStore,
    I: InputSource,
    W: Write,
{
    loop {
        let id = prompt.ask_with("Enter Flower's Id (FXXX): ", validate::flower_id)?;
        if api.flower_exists(&id) {
            prompt.say("The flower already exists!")?;
        } else {
            let name = prompt.ask_with("Enter Flower's Name: ", validate::flower_name)?;
            let import_date = prompt.ask_with("Enter Import Date (dd/mm/yyyy): ", validate::date)?;
            let unit_price = prompt.ask_with("Enter Unit Price: ", validate::unit_price)?;
            let category = prompt.ask("Enter Category: ")?;
            let result = api.add_flower(Flower::new(id, name, import_date, unit_price, category.trim()))?;
            show(prompt, result)?;
        }
        if !prompt.confirm("Do you want to add more flower? (Y/N): ")? {
            return Ok(());
        }
    }
}

fn find_flower<S, I, W>(api: &mut ShopApi<S>, prompt: &mut Prompter<I, W>) -> Result<()>
where
    S: DataStore,
    I: InputSource,
    W: Write,
{
    prompt.say("FIND BY:\n 1. Name\n 2. Id\n 3. Back to menu")?;
    let query = match prompt.choose("Your choice: ", 1, 3)? {
        1 => FlowerQuery::Name(prompt.ask("Enter Flower's Name: ")?),
        2 => FlowerQuery::Id(prompt.ask_with("Enter Flower's Id (FXXX): ", validate::flower_id)?),
        _ => return Ok(()),
    };

    let result = api.find_flowers(&query)?;
    prompt.say(&render_flowers(&result.listed_flowers))?;
    show(prompt, result)?;
    prompt.pause()
}

fn update_flower<S, I, W>(api: &mut ShopApi<S>, prompt: &mut Prompter<I, W>) -> Result<()>
where
    S: DataStore,
    I: InputSource,
    W: Write,
{
    let name = prompt.ask("Enter the name of the flower to update: ")?;
    let found = api.find_flowers(&FlowerQuery::Name(name))?;
    if found.listed_flowers.is_empty() {
        return show(prompt, found);
    }
    prompt.say(&render_flowers(&found.listed_flowers))?;

    let picked = if found.listed_flowers.len() == 1 {
        1
    } else {
        prompt.choose(
            "Choose the flower to update (0 to cancel): ",
            0,
            found.listed_flowers.len(),
        )?
    };
    if picked == 0 {
        return Ok(());
    }
    let id = found.listed_flowers[picked - 1].id.clone();

    prompt.say("Leave a field blank to keep its current value.")?;
    let name = prompt.ask("New Name: ")?;
    let import_date = prompt.ask("New Import Date (dd/mm/yyyy): ")?;
    let unit_price = prompt.ask("New Unit Price: ")?;
    let category = prompt.ask("New Category: ")?;
    let patch = FlowerPatch::from_answers(&name, &import_date, &unit_price, &category);

    let result = api.update_flower(&id, &patch)?;
    prompt.say(&render_flowers(&result.affected_flowers))?;
    show(prompt, result)
}

fn delete_flower<S, I, W>(api: &mut ShopApi<S>, prompt: &mut Prompter<I, W>) -> Result<()>
where
    S: DataStore,
    I: InputSource,
    W: Write,
{
    let id = prompt.ask_with("Enter Flower's Id (FXXX): ", validate::flower_id)?;
    if let DeleteCheck::Deletable(flower) = api.check_delete(&id) {
        prompt.say(&render_flowers(std::slice::from_ref(&flower)))?;
        if !prompt.confirm("Do you want to delete this flower? (Y/N): ")? {
            return prompt.say("Delete cancelled.");
        }
    }
    let result = api.delete_flower(&id)?;
    show(prompt, result)
}

fn add_orders<S, I, W>(api: &mut ShopApi<S>, prompt: &mut Prompter<I, W>) -> Result<()>
where
    S: DataStore,
    I: InputSource,
    W: Write,
{
    loop {
        if !api.has_flowers() {
            return prompt.say("There is no flower in store!");
        }

        let date = prompt.ask_with("Enter Order Date (dd/mm/yyyy): ", validate::date)?;
        let customer = prompt.ask_with("Enter Customer's Name: ", validate::customer_name)?;
        let mut lines = Vec::new();
        loop {
            let flower_id = prompt.ask_with("Enter Flower's Id (FXXX): ", |s| {
                let id = validate::flower_id(s)?;
                if api.flower_exists(&id) {
                    Ok(id)
                } else {
                    Err(ShopError::invalid("flower id", "the flower does not exist"))
                }
            })?;
            let quantity = prompt.ask_with("Enter Quantity: ", validate::quantity)?;
            lines.push(LineRequest::new(flower_id, quantity));
            if !prompt.confirm("Do you want to buy more flower? (Y/N): ")? {
                break;
            }
        }

        let result = api.add_order(OrderDraft {
            date,
            customer,
            lines,
        })?;
        show(prompt, result)?;
        if !prompt.confirm("Do you want to add more order? (Y/N): ")? {
            return Ok(());
        }
    }
}

fn display_orders<S, I, W>(api: &mut ShopApi<S>, prompt: &mut Prompter<I, W>) -> Result<()>
where
    S: DataStore,
    I: InputSource,
    W: Write,
{
    let start = prompt.ask_with("Enter Start Date (dd/mm/yyyy): ", validate::date)?;
    let end = prompt.ask_with("Enter End Date (dd/mm/yyyy): ", |s| not_before(s, start))?;

    let result = api.orders_between(start, end)?;
    prompt.say(&render_orders(&result.listed_orders))?;
    show(prompt, result)?;
    prompt.pause()
}

fn not_before(input: &str, start: NaiveDate) -> Result<NaiveDate> {
    let end = validate::date(input)?;
    if end < start {
        return Err(ShopError::invalid(
            "date",
            format!("the date must not be before {}", start.format(DATE_FORMAT)),
        ));
    }
    Ok(end)
}

fn sort_orders<S, I, W>(api: &mut ShopApi<S>, prompt: &mut Prompter<I, W>) -> Result<()>
where
    S: DataStore,
    I: InputSource,
    W: Write,
{
    prompt.say("SORT BY:\n 1. Order Id\n 2. Order Date\n 3. Customer's Name\n 4. Order Total\n 5. Back to menu")?;
    let field = match prompt.choose("Your choice: ", 1, 5)? {
        1 => SortField::Id,
        2 => SortField::Date,
        3 => SortField::Customer,
        4 => SortField::TotalCost,
        _ => return Ok(()),
    };
    prompt.say("ORDER:\n 1. Ascending\n 2. Descending")?;
    let direction = match prompt.choose("Your choice: ", 1, 2)? {
        1 => SortDirection::Ascending,
        _ => SortDirection::Descending,
    };

    let result = api.sort_orders(field, direction)?;
    prompt.say(&render_orders(&result.listed_orders))?;
    show(prompt, result)?;
    prompt.pause()
}

fn quit<S, I, W>(api: &mut ShopApi<S>, prompt: &mut Prompter<I, W>) -> Result<Flow>
where
    S: DataStore,
    I: InputSource,
    W: Write,
{
    if !prompt.confirm("Do you want to quit? (Y/N): ")? {
        return Ok(Flow::Continue);
    }
    if api.has_unsaved_changes()
        && prompt.confirm("Data has been changed. Do you want to save before quitting? (Y/N): ")?
    {
        let result = api.save()?;
        show(prompt, result)?;
    }
    prompt.say("Goodbye, have a nice day!")?;
    Ok(Flow::Quit)
}
